use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("No previous version to restore")]
    NoPreviousVersion,

    #[error("No undone version to restore")]
    NoUndoneVersion,
}

/// Linear undo/redo over whole-state snapshots.
///
/// `history` is never empty; its first element is the state the session
/// started with and its last element is the current state. Committing after
/// an undo discards everything on the redo stack.
#[derive(Debug, Clone)]
pub struct VersionManager<S> {
    history: Vec<S>,
    redo: Vec<S>,
}

impl<S> VersionManager<S> {
    pub fn new(initial: S) -> Self {
        Self {
            history: vec![initial],
            redo: Vec::new(),
        }
    }

    pub fn commit(&mut self, snapshot: S) {
        self.history.push(snapshot);
        self.redo.clear();
    }

    /// Steps back one commit and returns the state now current.
    pub fn undo(&mut self) -> Result<&S, VersionError> {
        if self.history.len() <= 1 {
            return Err(VersionError::NoPreviousVersion);
        }
        if let Some(top) = self.history.pop() {
            self.redo.push(top);
        }
        self.history.last().ok_or(VersionError::NoPreviousVersion)
    }

    /// Re-applies the most recently undone commit and returns it.
    pub fn redo(&mut self) -> Result<&S, VersionError> {
        let snapshot = self.redo.pop().ok_or(VersionError::NoUndoneVersion)?;
        self.history.push(snapshot);
        self.history.last().ok_or(VersionError::NoUndoneVersion)
    }

    pub fn current(&self) -> &S {
        &self.history[self.history.len() - 1]
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
