use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::warn;

use super::{DataStore, LoadResult};
use crate::error::Result;
use crate::model::Record;

/// File-backed store: one UTF-8 text file, one record per line, in the
/// grammar each record type defines via [`Record`].
///
/// The containing directory and the file itself are created on first use; an
/// absent file is an empty store, not an error. Saves truncate and rewrite
/// the whole file — single process, single writer, no locking.
pub struct FileStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: Record> FileStore<R> {
    pub fn new(data_dir: impl Into<PathBuf>, file_name: &str) -> FileStore<R> {
        FileStore {
            path: data_dir.into().join(file_name),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> Result<bool> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        if !self.path.exists() {
            fs::File::create(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }
}

impl<R: Record> DataStore<R> for FileStore<R> {
    fn load(&mut self) -> LoadResult<R> {
        match self.ensure_file() {
            Ok(true) => return LoadResult::default(),
            Ok(false) => {}
            Err(e) => {
                // unrecoverable bootstrap: degrade to an empty in-memory store
                warn!("could not prepare {}: {}", self.path.display(), e);
                return LoadResult::default();
            }
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("could not read {}: {}", self.path.display(), e);
                return LoadResult::default();
            }
        };

        let mut result = LoadResult::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match R::from_line(line) {
                Some(record) => {
                    result.records.push(record);
                    result.loaded += 1;
                }
                None => result.skipped += 1,
            }
        }
        if result.skipped > 0 {
            warn!(
                "skipped {} corrupted line(s) in {}",
                result.skipped,
                self.path.display()
            );
        }
        result
    }

    fn save(&mut self, records: &[R]) -> Result<()> {
        self.ensure_file()?;
        let mut file = fs::File::create(&self.path)?;
        for record in records {
            writeln!(file, "{}", record.to_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Client, Task};
    use chrono::NaiveDate;

    fn store_in(dir: &Path) -> FileStore<Task> {
        FileStore::new(dir, "tasks.txt")
    }

    #[test]
    fn load_creates_missing_dir_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        let mut store = store_in(&data_dir);

        let result = store.load();
        assert_eq!(result.loaded, 0);
        assert_eq!(result.skipped, 0);
        assert!(result.records.is_empty());
        assert!(data_dir.join("tasks.txt").exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_in(tmp.path());

        let due = NaiveDate::from_ymd_opt(2019, 12, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let mut done = Task::todo("buy milk");
        done.mark();
        let tasks = vec![done, Task::deadline("submit", due)];
        store.save(&tasks).unwrap();

        // a second store at the same path sees the saved state
        let result = store_in(tmp.path()).load();
        assert_eq!(result.loaded, 2);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.records, tasks);
    }

    #[test]
    fn corrupted_lines_are_skipped_and_counted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tasks.txt");
        fs::write(
            &path,
            "T | 0 | read book\nT | 1\nD | 0 | submit | not-a-date\n\n",
        )
        .unwrap();

        let result = store_in(tmp.path()).load();
        assert_eq!(result.loaded, 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.records[0].description(), "read book");
    }

    #[test]
    fn save_truncates_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = store_in(tmp.path());
        store
            .save(&[Task::todo("one"), Task::todo("two"), Task::todo("three")])
            .unwrap();
        store.save(&[Task::todo("only")]).unwrap();

        let result = store.load();
        assert_eq!(result.loaded, 1);
        assert_eq!(result.records[0].description(), "only");
    }

    #[test]
    fn client_store_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store: FileStore<Client> = FileStore::new(tmp.path(), "clients.txt");
        let clients = vec![Client::new("Joe", "91234567", "joe@example.com")];
        store.save(&clients).unwrap();
        let result = store.load();
        assert_eq!(result.records, clients);
    }
}
