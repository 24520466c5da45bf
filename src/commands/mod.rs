//! Executable commands.
//!
//! Each command word has its own type implementing [`Executable`]. The parser
//! produces a [`Command`], which dispatches to the concrete type. A command
//! checks every precondition first and only then touches the [`Model`];
//! mutating commands finish with [`Model::commit`] so the change can be undone.

mod assignment;
mod class;
mod error;
mod general;
mod mark;
mod person;

pub use assignment::*;
pub use class::*;
pub use error::*;
pub use general::*;
pub use mark::*;
pub use person::*;

use crate::index::Index;
use crate::models::Person;
use crate::store::Model;

/// What a successful command hands back to the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The front end should show the help window.
    pub show_help: bool,
    /// The front end should shut down.
    pub exit: bool,
    /// The set of displayed students changed and should be redrawn.
    pub redisplay: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    pub fn with_redisplay(self) -> Self {
        Self {
            redisplay: true,
            ..self
        }
    }
}

pub trait Executable {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// A fully parsed command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    AddClass(AddClassCommand),
    DeleteClass(DeleteClassCommand),
    Assign(AssignCommand),
    Unassign(UnassignCommand),
    AssignAll(AssignAllCommand),
    UnassignAll(UnassignAllCommand),
    Mark(MarkCommand),
    Unmark(UnmarkCommand),
    Filter(FilterCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    fn inner(&self) -> &dyn Executable {
        match self {
            Self::Add(c) => c,
            Self::Edit(c) => c,
            Self::Delete(c) => c,
            Self::AddClass(c) => c,
            Self::DeleteClass(c) => c,
            Self::Assign(c) => c,
            Self::Unassign(c) => c,
            Self::AssignAll(c) => c,
            Self::UnassignAll(c) => c,
            Self::Mark(c) => c,
            Self::Unmark(c) => c,
            Self::Filter(c) => c,
            Self::Find(c) => c,
            Self::List(c) => c,
            Self::Clear(c) => c,
            Self::Undo(c) => c,
            Self::Redo(c) => c,
            Self::Help(c) => c,
            Self::Exit(c) => c,
        }
    }

    /// Whether a successful run changes the record book (and so should be
    /// persisted).
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Self::Filter(_) | Self::Find(_) | Self::List(_) | Self::Help(_) | Self::Exit(_)
        )
    }
}

impl Executable for Command {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        self.inner().execute(model)
    }
}

/// The student shown at `index` in the filtered view.
fn person_at(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)
}

/// Sorts case-insensitively and joins with `", "`.
fn join_sorted<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by_key(|name| name.to_lowercase());
    names.join(", ")
}
