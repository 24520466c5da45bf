use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use super::{create_parent_dir, RecordStorage, StorageError};
use crate::store::RecordBook;

/// Stores the record book as pretty-printed JSON:
///
/// ```json
/// { "persons": [ { "name": "Alice Tan", "phone": "91234567", "level": "Sec 3",
///                  "class_groups": ["Math"],
///                  "assignments": [ { "name": "hw1", "class_group": "Math", "marked": false } ] } ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonRecordStorage {
    path: PathBuf,
}

impl JsonRecordStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStorage for JsonRecordStorage {
    fn read(&self) -> Result<Option<RecordBook>, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let book: RecordBook = serde_json::from_str(&text).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), students = book.persons().len(), "Loaded record book");
        Ok(Some(book))
    }

    fn save(&self, book: &RecordBook) -> Result<(), StorageError> {
        create_parent_dir(&self.path)?;
        let text = serde_json::to_string_pretty(book).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, text).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "Saved record book");
        Ok(())
    }
}
