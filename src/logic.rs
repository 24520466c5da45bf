//! The entry point front ends talk to.
//!
//! [`Logic`] parses a line, runs the command against the [`Model`], saves the
//! record book after a successful mutating command, and records the line in
//! the command history. It is the only layer that performs I/O.

use tracing::{debug, info, warn};

use crate::commands::{CommandResult, Executable};
use crate::error::Result;
use crate::history::CommandHistory;
use crate::models::Person;
use crate::parser::parse_command;
use crate::sample::sample_record_book;
use crate::storage::{HistoryFile, RecordStorage};
use crate::store::{Model, RecordBook};

pub struct Logic {
    model: Model,
    history: CommandHistory,
    storage: Box<dyn RecordStorage>,
    history_file: Option<HistoryFile>,
}

impl Logic {
    pub fn new(model: Model, storage: Box<dyn RecordStorage>) -> Self {
        Self {
            model,
            history: CommandHistory::default(),
            storage,
            history_file: None,
        }
    }

    /// Opens a session on whatever `storage` holds.
    ///
    /// Nothing saved yet means the sample records are used; a file that cannot
    /// be read or parsed means an empty record book. Neither case is an error.
    pub fn load(storage: Box<dyn RecordStorage>) -> Self {
        let book = match storage.read() {
            Ok(Some(book)) => book,
            Ok(None) => {
                info!("No saved records, starting with sample data");
                sample_record_book().unwrap_or_else(|e| {
                    warn!(error = %e, "Sample data is invalid, starting empty");
                    RecordBook::new()
                })
            }
            Err(e) => {
                warn!(error = %e, "Could not load saved records, starting empty");
                RecordBook::new()
            }
        };
        Self::new(Model::new(book), storage)
    }

    /// Attaches a persisted history. Saved lines are loaded (newest
    /// `capacity` kept) and every later command is appended to `file`.
    pub fn with_history_file(mut self, file: HistoryFile, capacity: usize) -> Self {
        let saved = file.read_lines().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read command history");
            Vec::new()
        });
        self.history = CommandHistory::with_entries(capacity, saved);
        self.history_file = Some(file);
        self
    }

    /// Runs one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        self.record_history(input);

        let command = parse_command(input)?;
        debug!(?command, "Executing command");
        let result = command.execute(&mut self.model)?;

        if command.is_mutating() {
            self.storage.save(self.model.record_book())?;
        }
        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn filtered_persons(&self) -> &[Person] {
        self.model.filtered_persons()
    }

    /// Registers a callback for changes to the displayed students.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Person]) + 'static) {
        self.model.subscribe(listener);
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    fn record_history(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        self.history.add(input);
        if let Some(file) = &self.history_file {
            if let Err(e) = file.append(input) {
                warn!(error = %e, "Could not append to command history");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::Error;
    use crate::parser::ParseError;
    use crate::storage::{MemoryStorage, StorageError};

    /// Storage whose reads or writes always fail.
    struct BrokenStorage;

    impl RecordStorage for BrokenStorage {
        fn read(&self) -> std::result::Result<Option<RecordBook>, StorageError> {
            Err(StorageError::Io {
                path: "broken.json".into(),
                source: std::io::Error::other("unreadable"),
            })
        }

        fn save(&self, _book: &RecordBook) -> std::result::Result<(), StorageError> {
            self.read().map(|_| ())
        }
    }

    /// Shares one in-memory store between the test and the `Logic` under test.
    struct SharedStorage(Rc<MemoryStorage>);

    impl RecordStorage for SharedStorage {
        fn read(&self) -> std::result::Result<Option<RecordBook>, StorageError> {
            self.0.read()
        }

        fn save(&self, book: &RecordBook) -> std::result::Result<(), StorageError> {
            self.0.save(book)
        }
    }

    #[test]
    fn test_load_without_saved_data_uses_samples() {
        let logic = Logic::load(Box::new(MemoryStorage::new(None)));
        assert_eq!(logic.filtered_persons().len(), 5);
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let logic = Logic::load(Box::new(BrokenStorage));
        assert!(logic.filtered_persons().is_empty());
    }

    #[test]
    fn test_mutating_commands_are_saved() {
        let storage = Rc::new(MemoryStorage::new(Some(RecordBook::new())));
        let mut logic = Logic::load(Box::new(SharedStorage(Rc::clone(&storage))));

        logic.execute("add n/Alice p/911 l/P5").unwrap();

        let saved = storage.read().unwrap().unwrap();
        assert_eq!(saved.persons().len(), 1);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut logic = Logic::new(Model::default(), Box::new(BrokenStorage));

        let result = logic.execute("add n/Alice p/911 l/P5");

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(logic.execute("list").is_ok());
    }

    #[test]
    fn test_every_non_blank_line_is_recorded() {
        let mut logic = Logic::new(Model::default(), Box::new(MemoryStorage::default()));

        let result = logic.execute("bogus");
        logic.execute("  ").ok();
        logic.execute(" list ").unwrap();

        assert!(matches!(result, Err(Error::Parse(ParseError::UnknownCommand))));
        assert_eq!(logic.history().entries().collect::<Vec<_>>(), ["bogus", "list"]);
    }
}
