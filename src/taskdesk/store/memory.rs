use super::{DataStore, LoadResult};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing. Holds the last saved sequence and never
/// touches the filesystem.
#[derive(Default)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> InMemoryStore<R> {
        InMemoryStore {
            records: Vec::new(),
        }
    }

    pub fn with_records(records: Vec<R>) -> InMemoryStore<R> {
        InMemoryStore { records }
    }

    pub fn saved(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> DataStore<R> for InMemoryStore<R> {
    fn load(&mut self) -> LoadResult<R> {
        LoadResult {
            loaded: self.records.len(),
            skipped: 0,
            records: self.records.clone(),
        }
    }

    fn save(&mut self, records: &[R]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
