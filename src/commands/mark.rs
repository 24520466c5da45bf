use super::{person_at, CommandError, CommandResult, Executable};
use crate::index::Index;
use crate::models::{Assignment, Person};
use crate::store::Model;

/// Marks an assignment as done for one or more displayed students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkCommand {
    indices: Vec<Index>,
    assignment: Assignment,
}

impl MarkCommand {
    pub const COMMAND_WORD: &'static str = "mark";
    pub const USAGE: &'static str = "mark: Marks an assignment for the students at the given indices.\n\
        Parameters: INDEX[-INDEX] [INDEX]... c/CLASS a/ASSIGNMENT\n\
        Example: mark 1-3 5 c/Math a/hw1";

    pub fn new(indices: Vec<Index>, assignment: Assignment) -> Self {
        Self {
            indices,
            assignment,
        }
    }
}

impl Executable for MarkCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let names = set_marked(model, &self.indices, &self.assignment, true)?;
        Ok(CommandResult::new(format!(
            "Marked {} ({}) for: {}",
            self.assignment.name(),
            self.assignment.class_group().name(),
            names.join(", ")
        )))
    }
}

/// Clears the done mark of an assignment for one or more displayed students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarkCommand {
    indices: Vec<Index>,
    assignment: Assignment,
}

impl UnmarkCommand {
    pub const COMMAND_WORD: &'static str = "unmark";
    pub const USAGE: &'static str = "unmark: Unmarks an assignment for the students at the given indices.\n\
        Parameters: INDEX[-INDEX] [INDEX]... c/CLASS a/ASSIGNMENT\n\
        Example: unmark 2 c/Math a/hw1";

    pub fn new(indices: Vec<Index>, assignment: Assignment) -> Self {
        Self {
            indices,
            assignment,
        }
    }
}

impl Executable for UnmarkCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let names = set_marked(model, &self.indices, &self.assignment, false)?;
        Ok(CommandResult::new(format!(
            "Unmarked {} ({}) for: {}",
            self.assignment.name(),
            self.assignment.class_group().name(),
            names.join(", ")
        )))
    }
}

/// Moves `assignment` into the `marked` state for the students at `indices`.
///
/// Students already in that state are skipped; if that is all of them the
/// command fails. Returns the title-cased names of the students changed, in
/// index order.
fn set_marked(
    model: &mut Model,
    indices: &[Index],
    assignment: &Assignment,
    marked: bool,
) -> Result<Vec<String>, CommandError> {
    let mut targets: Vec<(Person, Assignment)> = Vec::with_capacity(indices.len());
    for &index in indices {
        let person = person_at(model, index)?;
        let stored = person
            .find_assignment(assignment)
            .cloned()
            .ok_or_else(|| CommandError::AssignmentNotFound {
                assignment: assignment.name().to_string(),
                name: person.name().title_case(),
            })?;
        targets.push((person, stored));
    }

    let pending: Vec<(Person, Assignment)> = targets
        .into_iter()
        .filter(|(_, stored)| stored.is_marked() != marked)
        .collect();
    if pending.is_empty() {
        let name = assignment.name().to_string();
        return Err(if marked {
            CommandError::AlreadyMarked(name)
        } else {
            CommandError::AlreadyUnmarked(name)
        });
    }

    let names = pending.iter().map(|(p, _)| p.name().title_case()).collect();
    let replacements = pending
        .into_iter()
        .map(|(person, stored)| {
            let edited = person.with_replaced_assignment(&stored, stored.with_marked(marked));
            (person, edited)
        })
        .collect();
    model.set_persons(replacements)?;
    model.commit();

    Ok(names)
}
