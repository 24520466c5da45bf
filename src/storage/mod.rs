//! Persistence of the record book and the command history.
//!
//! Commands never touch these; [`crate::logic::Logic`] saves after each
//! mutating command.

mod history_file;
mod json;

pub use history_file::HistoryFile;
pub use json::JsonRecordStorage;

use std::path::PathBuf;

use thiserror::Error;

use crate::store::RecordBook;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file {path} is not in the correct format: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a [`RecordBook`] lives between sessions.
pub trait RecordStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<RecordBook>, StorageError>;

    fn save(&self, book: &RecordBook) -> Result<(), StorageError>;
}

/// Keeps the book in memory only; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: std::cell::RefCell<Option<RecordBook>>,
}

impl MemoryStorage {
    pub fn new(initial: Option<RecordBook>) -> Self {
        Self {
            saved: std::cell::RefCell::new(initial),
        }
    }
}

impl RecordStorage for MemoryStorage {
    fn read(&self) -> Result<Option<RecordBook>, StorageError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, book: &RecordBook) -> Result<(), StorageError> {
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }
}

fn create_parent_dir(path: &std::path::Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
