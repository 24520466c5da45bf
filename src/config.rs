use std::path::PathBuf;

use thiserror::Error;

use crate::history::DEFAULT_CAPACITY;

pub const ENV_DATA_FILE: &str = "CLASSBOOK_DATA_FILE";
pub const ENV_HISTORY_FILE: &str = "CLASSBOOK_HISTORY_FILE";
pub const ENV_HISTORY_CAPACITY: &str = "CLASSBOOK_HISTORY_CAPACITY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("CLASSBOOK_HISTORY_CAPACITY must be a positive integer, got {0:?}")]
    InvalidHistoryCapacity(String),
}

/// Where the record book and history live, and how much history to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub history_file: PathBuf,
    pub history_capacity: usize,
}

impl Config {
    /// Reads the `CLASSBOOK_*` variables, falling back to the platform data
    /// directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = lookup(ENV_DATA_FILE).map(PathBuf::from);
        let history_file = lookup(ENV_HISTORY_FILE).map(PathBuf::from);

        let history_capacity = match lookup(ENV_HISTORY_CAPACITY) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidHistoryCapacity(raw))?,
            None => DEFAULT_CAPACITY,
        };

        let (data_file, history_file) = match (data_file, history_file) {
            (Some(data), Some(history)) => (data, history),
            (data, history) => {
                let dirs = directories::ProjectDirs::from("", "", "classbook")
                    .ok_or(ConfigError::NoDataDir)?;
                let data_dir = dirs.data_dir();
                (
                    data.unwrap_or_else(|| data_dir.join("classbook.json")),
                    history.unwrap_or_else(|| data_dir.join("history.txt")),
                )
            }
        };

        Ok(Self {
            data_file,
            history_file,
            history_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_explicit_paths() {
        let config = Config::from_lookup(lookup(&[
            (ENV_DATA_FILE, "/tmp/book.json"),
            (ENV_HISTORY_FILE, "/tmp/history.txt"),
            (ENV_HISTORY_CAPACITY, "10"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/book.json"));
        assert_eq!(config.history_file, PathBuf::from("/tmp/history.txt"));
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_default_capacity() {
        let config = Config::from_lookup(lookup(&[
            (ENV_DATA_FILE, "a.json"),
            (ENV_HISTORY_FILE, "h.txt"),
        ]))
        .unwrap();
        assert_eq!(config.history_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_bad_capacity() {
        let result = Config::from_lookup(lookup(&[
            (ENV_DATA_FILE, "a.json"),
            (ENV_HISTORY_FILE, "h.txt"),
            (ENV_HISTORY_CAPACITY, "0"),
        ]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidHistoryCapacity("0".to_string()))
        );
    }
}
