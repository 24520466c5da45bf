use im::OrdSet;

use super::{join_sorted, person_at, CommandError, CommandResult, Executable};
use crate::index::Index;
use crate::models::{Assignment, ClassGroup, Person};
use crate::store::{Model, PersonPredicate};

/// Gives the student at `index` one or more assignments of a class group the
/// student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignCommand {
    index: Index,
    class_group: ClassGroup,
    assignments: Option<OrdSet<Assignment>>,
}

impl AssignCommand {
    pub const COMMAND_WORD: &'static str = "assign";
    pub const USAGE: &'static str = "assign: Adds assignments of a class group to the student at the given index.\n\
        Parameters: INDEX c/CLASS a/ASSIGNMENT [a/ASSIGNMENT]...\n\
        Example: assign 1 c/Math a/hw1 a/hw2";

    pub fn new(
        index: Index,
        class_group: ClassGroup,
        assignments: Option<OrdSet<Assignment>>,
    ) -> Self {
        Self {
            index,
            class_group,
            assignments,
        }
    }
}

impl Executable for AssignCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = enrolled_person_at(model, self.index, &self.class_group)?;
        let requested = self.assignments.clone().unwrap_or_default();
        if requested.is_empty() {
            return Err(CommandError::NothingToAdd);
        }

        let existing: Vec<&str> = requested
            .iter()
            .filter(|a| target.find_assignment(a).is_some())
            .map(Assignment::name)
            .collect();
        if !existing.is_empty() {
            return Err(CommandError::DuplicateAssignments(join_sorted(existing)));
        }

        let names = join_sorted(requested.iter().map(Assignment::name));
        let edited = target.with_assignments(target.assignments().clone().union(requested));
        model.set_person(&target, edited)?;
        model.commit();

        Ok(CommandResult::new(format!(
            "Assigned {} ({}) to {}",
            names,
            self.class_group.name(),
            target.name()
        )))
    }
}

/// Takes one or more assignments of a class group away from the student at
/// `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignCommand {
    index: Index,
    class_group: ClassGroup,
    assignments: Option<OrdSet<Assignment>>,
}

impl UnassignCommand {
    pub const COMMAND_WORD: &'static str = "unassign";
    pub const USAGE: &'static str = "unassign: Removes assignments of a class group from the student at the given index.\n\
        Parameters: INDEX c/CLASS a/ASSIGNMENT [a/ASSIGNMENT]...\n\
        Example: unassign 1 c/Math a/hw1";

    pub fn new(
        index: Index,
        class_group: ClassGroup,
        assignments: Option<OrdSet<Assignment>>,
    ) -> Self {
        Self {
            index,
            class_group,
            assignments,
        }
    }
}

impl Executable for UnassignCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = enrolled_person_at(model, self.index, &self.class_group)?;
        let requested = self.assignments.clone().unwrap_or_default();
        if requested.is_empty() {
            return Err(CommandError::NothingToDelete);
        }

        let missing: Vec<&str> = requested
            .iter()
            .filter(|a| target.find_assignment(a).is_none())
            .map(Assignment::name)
            .collect();
        if !missing.is_empty() {
            return Err(CommandError::MissingAssignments(join_sorted(missing)));
        }

        let names = join_sorted(requested.iter().map(Assignment::name));
        let remaining = target
            .assignments()
            .iter()
            .filter(|a| !requested.contains(*a))
            .cloned()
            .collect();
        let edited = target.with_assignments(remaining);
        model.set_person(&target, edited)?;
        model.commit();

        Ok(CommandResult::new(format!(
            "Unassigned {} ({}) from {}",
            names,
            self.class_group.name(),
            target.name()
        )))
    }
}

/// Gives an assignment to every student in a class group who lacks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignAllCommand {
    class_group: ClassGroup,
    assignment: Assignment,
}

impl AssignAllCommand {
    pub const COMMAND_WORD: &'static str = "assignall";
    pub const USAGE: &'static str = "assignall: Adds an assignment to every student in a class group.\n\
        Parameters: c/CLASS a/ASSIGNMENT\n\
        Example: assignall c/Math a/hw1";

    pub fn new(class_group: ClassGroup, assignment: Assignment) -> Self {
        Self {
            class_group,
            assignment,
        }
    }
}

impl Executable for AssignAllCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let members = class_members(model, &self.class_group)?;

        let replacements: Vec<(Person, Person)> = members
            .into_iter()
            .filter(|p| p.find_assignment(&self.assignment).is_none())
            .map(|p| {
                let mut assignments = p.assignments().clone();
                assignments.insert(self.assignment.clone());
                let edited = p.with_assignments(assignments);
                (p, edited)
            })
            .collect();
        if replacements.is_empty() {
            return Err(CommandError::AlreadyAssigned {
                class_group: self.class_group.name().to_string(),
                assignment: self.assignment.name().to_string(),
            });
        }

        let count = replacements.len();
        model.set_persons(replacements)?;
        model.update_filtered_persons(PersonPredicate::ShowAll);
        model.commit();

        Ok(CommandResult::new(format!(
            "Assigned {} to {} student(s) in class group {}",
            self.assignment.name(),
            count,
            self.class_group.name()
        ))
        .with_redisplay())
    }
}

/// Removes an assignment from every student in a class group who has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignAllCommand {
    class_group: ClassGroup,
    assignment: Assignment,
}

impl UnassignAllCommand {
    pub const COMMAND_WORD: &'static str = "unassignall";
    pub const USAGE: &'static str = "unassignall: Removes an assignment from every student in a class group.\n\
        Parameters: c/CLASS a/ASSIGNMENT\n\
        Example: unassignall c/Math a/hw1";

    pub fn new(class_group: ClassGroup, assignment: Assignment) -> Self {
        Self {
            class_group,
            assignment,
        }
    }
}

impl Executable for UnassignAllCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let members = class_members(model, &self.class_group)?;

        let replacements: Vec<(Person, Person)> = members
            .into_iter()
            .filter(|p| p.find_assignment(&self.assignment).is_some())
            .map(|p| {
                let mut assignments = p.assignments().clone();
                assignments.remove(&self.assignment);
                let edited = p.with_assignments(assignments);
                (p, edited)
            })
            .collect();
        if replacements.is_empty() {
            return Err(CommandError::AlreadyUnassigned {
                class_group: self.class_group.name().to_string(),
                assignment: self.assignment.name().to_string(),
            });
        }

        let count = replacements.len();
        model.set_persons(replacements)?;
        model.update_filtered_persons(PersonPredicate::ShowAll);
        model.commit();

        Ok(CommandResult::new(format!(
            "Unassigned {} from {} student(s) in class group {}",
            self.assignment.name(),
            count,
            self.class_group.name()
        ))
        .with_redisplay())
    }
}

/// The displayed student at `index`, provided they are in `class_group`.
fn enrolled_person_at(
    model: &Model,
    index: Index,
    class_group: &ClassGroup,
) -> Result<Person, CommandError> {
    let person = person_at(model, index)?;
    if !person.is_in_class_group(class_group) {
        return Err(CommandError::NotInClassGroup(class_group.name().to_string()));
    }
    Ok(person)
}

/// Every student in `class_group`, ignoring the current filter.
fn class_members(model: &Model, class_group: &ClassGroup) -> Result<Vec<Person>, CommandError> {
    let members: Vec<Person> = model
        .persons()
        .filter(|p| p.is_in_class_group(class_group))
        .cloned()
        .collect();
    if members.is_empty() {
        return Err(CommandError::NoStudentsInClassGroup(
            class_group.name().to_string(),
        ));
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Name, Phone};
    use crate::store::RecordBook;

    fn math() -> ClassGroup {
        ClassGroup::parse("Math").unwrap()
    }

    fn hw(name: &str) -> Assignment {
        Assignment::parse(name, math()).unwrap()
    }

    fn student(name: &str, phone: &str, assignments: &[&str]) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Level::parse("Sec 3").unwrap(),
            OrdSet::unit(math()),
            assignments.iter().map(|a| hw(a)).collect(),
        )
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_assign_reports_all_duplicates_without_mutating() {
        let mut model = Model::new(
            RecordBook::from_persons(vec![student("Alice", "911", &["hw2", "hw1"])]).unwrap(),
        );
        let before = model.filtered_persons()[0].assignments().clone();
        let requested = ["hw3", "HW2", "hw1"].iter().map(|a| hw(a)).collect();

        let result = AssignCommand::new(first(), math(), Some(requested)).execute(&mut model);

        assert_eq!(
            result,
            Err(CommandError::DuplicateAssignments("hw1, hw2".to_string()))
        );
        assert_eq!(model.filtered_persons()[0].assignments(), &before);
        assert!(!model.can_undo());
    }

    #[test]
    fn test_assign_with_explicit_empty_list() {
        let mut model =
            Model::new(RecordBook::from_persons(vec![student("Alice", "911", &[])]).unwrap());
        let result = AssignCommand::new(first(), math(), Some(OrdSet::new())).execute(&mut model);
        assert_eq!(result, Err(CommandError::NothingToAdd));
    }

    #[test]
    fn test_unassign_reports_missing() {
        let mut model =
            Model::new(RecordBook::from_persons(vec![student("Alice", "911", &["hw1"])]).unwrap());
        let requested = ["hw1", "hw9"].iter().map(|a| hw(a)).collect();

        let result = UnassignCommand::new(first(), math(), Some(requested)).execute(&mut model);

        assert_eq!(
            result,
            Err(CommandError::MissingAssignments("hw9".to_string()))
        );
    }

    #[test]
    fn test_unassign_with_explicit_empty_list() {
        let mut model =
            Model::new(RecordBook::from_persons(vec![student("Alice", "911", &["hw1"])]).unwrap());
        let result =
            UnassignCommand::new(first(), math(), Some(OrdSet::new())).execute(&mut model);
        assert_eq!(result, Err(CommandError::NothingToDelete));
    }

    #[test]
    fn test_unassign_all_when_nobody_has_it() {
        let mut model =
            Model::new(RecordBook::from_persons(vec![student("Alice", "911", &[])]).unwrap());
        let result = UnassignAllCommand::new(math(), hw("hw1")).execute(&mut model);
        assert_eq!(
            result,
            Err(CommandError::AlreadyUnassigned {
                class_group: "Math".to_string(),
                assignment: "hw1".to_string(),
            })
        );
    }

    #[test]
    fn test_unassign_all_counts_holders() {
        let mut model = Model::new(
            RecordBook::from_persons(vec![
                student("Alice", "911", &["hw1"]),
                student("Bob", "922", &[]),
                student("Carol", "933", &["hw1"]),
            ])
            .unwrap(),
        );

        let result = UnassignAllCommand::new(math(), hw("hw1"))
            .execute(&mut model)
            .unwrap();

        assert_eq!(
            result.feedback,
            "Unassigned hw1 from 2 student(s) in class group Math"
        );
        assert!(model.persons().all(|p| p.assignments().is_empty()));
    }
}
