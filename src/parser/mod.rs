//! Turns a raw command line into a [`Command`].
//!
//! The first whitespace-separated word picks the command; the rest is split
//! by [`tokenize`] and handed to that command's parser. Parsing never looks at
//! the record book, so a command that parses may still fail when executed.

mod assignment;
mod class;
mod person;
mod tokenizer;
mod util;

pub use tokenizer::*;
pub use util::{parse_index, parse_indices};

use thiserror::Error;
use tracing::debug;

use crate::commands::{
    AddClassCommand, AddCommand, AssignAllCommand, AssignCommand, ClearCommand, Command,
    DeleteClassCommand, DeleteCommand, EditCommand, ExitCommand, FilterCommand, FindCommand,
    HelpCommand, ListCommand, MarkCommand, RedoCommand, UnassignAllCommand, UnassignCommand,
    UndoCommand, UnmarkCommand,
};
use crate::models::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format!\n{0}")]
    InvalidCommandFormat(&'static str),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    #[error("This command does not accept the following field(s): {}", .0.join(" "))]
    InvalidPrefixes(Vec<String>),

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    #[error("Invalid index range: {start}-{end} (start must not exceed end)")]
    InvalidIndexRange { start: usize, end: usize },

    #[error("Index range {start}-{end} is too large (at most {} indices)", util::MAX_INDEX_RANGE)]
    IndexRangeTooLarge { start: usize, end: usize },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,

    #[error("Assignments must be given with exactly one class group.")]
    AssignmentWithoutClassGroup,
}

/// Parses one line of user input.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (input, ""),
    };
    if word.is_empty() {
        return Err(ParseError::InvalidCommandFormat(HelpCommand::USAGE));
    }
    debug!(command = word, "Parsing command");

    let command = match word {
        AddCommand::COMMAND_WORD => Command::Add(person::parse_add(args)?),
        EditCommand::COMMAND_WORD => Command::Edit(person::parse_edit(args)?),
        DeleteCommand::COMMAND_WORD => Command::Delete(person::parse_delete(args)?),
        AddClassCommand::COMMAND_WORD => Command::AddClass(class::parse_add_class(args)?),
        DeleteClassCommand::COMMAND_WORD => {
            Command::DeleteClass(class::parse_delete_class(args)?)
        }
        FilterCommand::COMMAND_WORD => Command::Filter(class::parse_filter(args)?),
        AssignCommand::COMMAND_WORD => Command::Assign(assignment::parse_assign(args)?),
        UnassignCommand::COMMAND_WORD => Command::Unassign(assignment::parse_unassign(args)?),
        AssignAllCommand::COMMAND_WORD => {
            Command::AssignAll(assignment::parse_assign_all(args)?)
        }
        UnassignAllCommand::COMMAND_WORD => {
            Command::UnassignAll(assignment::parse_unassign_all(args)?)
        }
        MarkCommand::COMMAND_WORD => Command::Mark(assignment::parse_mark(args)?),
        UnmarkCommand::COMMAND_WORD => Command::Unmark(assignment::parse_unmark(args)?),
        FindCommand::COMMAND_WORD => Command::Find(parse_find(args)?),
        ListCommand::COMMAND_WORD => Command::List(ListCommand),
        ClearCommand::COMMAND_WORD => Command::Clear(ClearCommand),
        UndoCommand::COMMAND_WORD => Command::Undo(UndoCommand),
        RedoCommand::COMMAND_WORD => Command::Redo(RedoCommand),
        HelpCommand::COMMAND_WORD => Command::Help(HelpCommand),
        ExitCommand::COMMAND_WORD => Command::Exit(ExitCommand),
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat(FindCommand::USAGE));
    }
    Ok(FindCommand::new(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidCommandFormat(HelpCommand::USAGE))
        );
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(parse_command("launch 1"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_command("LIST"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn test_argument_free_commands_ignore_trailing_text() {
        assert_eq!(parse_command("list extra"), Ok(Command::List(ListCommand)));
        assert_eq!(parse_command(" undo "), Ok(Command::Undo(UndoCommand)));
        assert_eq!(parse_command("exit now"), Ok(Command::Exit(ExitCommand)));
    }

    #[test]
    fn test_find_keywords() {
        assert_eq!(
            parse_command("find  alice   bob "),
            Ok(Command::Find(FindCommand::new(vec![
                "alice".to_string(),
                "bob".to_string()
            ])))
        );
        assert_eq!(
            parse_command("find"),
            Err(ParseError::InvalidCommandFormat(FindCommand::USAGE))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::DuplicatePrefixes(vec!["n/".into(), "p/".into()]).to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
        assert_eq!(
            ParseError::InvalidIndexRange { start: 3, end: 1 }.to_string(),
            "Invalid index range: 3-1 (start must not exceed end)"
        );
        assert_eq!(
            ParseError::IndexRangeTooLarge { start: 1, end: 20_000 }.to_string(),
            "Index range 1-20000 is too large (at most 10000 indices)"
        );
    }
}
