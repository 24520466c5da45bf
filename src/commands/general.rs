use super::{CommandError, CommandResult, Executable};
use super::{
    AddClassCommand, AddCommand, AssignAllCommand, AssignCommand, DeleteClassCommand,
    DeleteCommand, EditCommand, FilterCommand, MarkCommand, UnassignAllCommand, UnassignCommand,
    UnmarkCommand,
};
use crate::store::{Model, PersonPredicate};

/// Shows every student again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Executable for ListCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_persons(PersonPredicate::ShowAll);
        Ok(CommandResult::new("Listed all students").with_redisplay())
    }
}

/// Shows students with a name word matching any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds students whose names contain any of the given words (case-insensitive).\n\
        Parameters: KEYWORD [KEYWORD]...\n\
        Example: find alice bob";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Executable for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_persons(PersonPredicate::NameContainsKeywords(self.keywords.clone()));
        Ok(CommandResult::new(format!(
            "{} student(s) listed!",
            model.filtered_persons().len()
        ))
        .with_redisplay())
    }
}

/// Empties the record book. Undoable like any other change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Executable for ClearCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear();
        model.commit();
        Ok(CommandResult::new("Record book has been cleared!").with_redisplay())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub const COMMAND_WORD: &'static str = "undo";
}

impl Executable for UndoCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.undo().map_err(|_| CommandError::NothingToUndo)?;
        Ok(CommandResult::new("Undo success!").with_redisplay())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub const COMMAND_WORD: &'static str = "redo";
}

impl Executable for RedoCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.redo().map_err(|_| CommandError::NothingToRedo)?;
        Ok(CommandResult::new("Redo success!").with_redisplay())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";

    /// One usage block per command, separated by blank lines.
    pub fn usage_summary() -> String {
        [
            AddCommand::USAGE,
            EditCommand::USAGE,
            DeleteCommand::USAGE,
            AddClassCommand::USAGE,
            DeleteClassCommand::USAGE,
            AssignCommand::USAGE,
            UnassignCommand::USAGE,
            AssignAllCommand::USAGE,
            UnassignAllCommand::USAGE,
            MarkCommand::USAGE,
            UnmarkCommand::USAGE,
            FilterCommand::USAGE,
            FindCommand::USAGE,
            "list, clear, undo, redo, help, exit: take no parameters",
        ]
        .join("\n\n")
    }
}

impl Executable for HelpCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: Self::usage_summary(),
            show_help: true,
            ..CommandResult::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Executable for ExitCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: "Exiting as requested ...".to_string(),
            exit: true,
            ..CommandResult::default()
        })
    }
}
