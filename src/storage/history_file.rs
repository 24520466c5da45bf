use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::{create_parent_dir, StorageError};

/// Append-only log of entered commands, one per line, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every saved line, skipping blanks. A missing file has no lines.
    pub fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn append(&self, command: &str) -> Result<(), StorageError> {
        create_parent_dir(&self.path)?;
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        // Embedded newlines would split one command into several on reload.
        writeln!(file, "{}", command.replace(['\r', '\n'], " ")).map_err(io_err)
    }
}
