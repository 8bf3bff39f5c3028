//! Storage layer.
//!
//! Persistence sits behind the [`DataStore`] trait so the lists can be tested
//! against [`memory::InMemoryStore`] without touching the filesystem, while
//! production runs on [`fs::FileStore`].
//!
//! The contract is deliberately coarse: `save` rewrites the complete record
//! sequence (there is no incremental append), and `load` returns whatever
//! could be decoded plus a count of the lines that could not. Load never
//! fails — a missing or partially corrupted file yields a smaller result,
//! not an error.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Outcome of one load: the decoded records plus line-count bookkeeping.
/// Consumed once by the startup greeting.
#[derive(Debug)]
pub struct LoadResult<R> {
    pub records: Vec<R>,
    pub loaded: usize,
    pub skipped: usize,
}

impl<R> Default for LoadResult<R> {
    fn default() -> Self {
        LoadResult {
            records: Vec::new(),
            loaded: 0,
            skipped: 0,
        }
    }
}

/// The counts of a [`LoadResult`] without the records, for the greeting path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

impl<R> LoadResult<R> {
    pub fn stats(&self) -> LoadStats {
        LoadStats {
            loaded: self.loaded,
            skipped: self.skipped,
        }
    }
}

/// Abstract interface for persisting one kind of record.
pub trait DataStore<R: Record> {
    /// Reads the backing store, skipping (and counting) corrupted lines.
    fn load(&mut self) -> LoadResult<R>;

    /// Replaces the backing store's content with the given sequence.
    fn save(&mut self, records: &[R]) -> Result<()>;
}
