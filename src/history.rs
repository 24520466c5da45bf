use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;

/// The most recent raw command lines, oldest first, with a browsing cursor.
///
/// The cursor ranges over `0..=len`; `len` means "past the newest entry",
/// which is where every [`add`](Self::add) leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            cursor: 0,
        }
    }

    /// Builds a history from previously saved lines, keeping only the newest
    /// `capacity` of them.
    pub fn with_entries(capacity: usize, entries: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new(capacity);
        for entry in entries {
            history.add(entry);
        }
        history
    }

    pub fn add(&mut self, command: impl Into<String>) {
        self.entries.push_back(command.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len();
    }

    /// Steps back one entry. `None` once the oldest entry has been reached.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps forward one entry. Stepping past the newest entry returns `None`
    /// and parks the cursor at the end.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
