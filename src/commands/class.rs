use im::OrdSet;

use super::{join_sorted, person_at, CommandError, CommandResult, Executable};
use crate::index::Index;
use crate::models::ClassGroup;
use crate::store::{Model, PersonPredicate};

/// Enrolls the student at `index` in one or more class groups.
///
/// `class_groups` is `None` when no `c/` was given and `Some(empty)` for a
/// lone empty `c/`; both leave nothing to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClassCommand {
    index: Index,
    class_groups: Option<OrdSet<ClassGroup>>,
}

impl AddClassCommand {
    pub const COMMAND_WORD: &'static str = "addclass";
    pub const USAGE: &'static str = "addclass: Adds class groups to the student at the given index.\n\
        Parameters: INDEX c/CLASS [c/CLASS]...\n\
        Example: addclass 1 c/Math c/Science";

    pub fn new(index: Index, class_groups: Option<OrdSet<ClassGroup>>) -> Self {
        Self {
            index,
            class_groups,
        }
    }
}

impl Executable for AddClassCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let requested = self.class_groups.clone().unwrap_or_default();
        if requested.is_empty() {
            return Err(CommandError::NothingToAdd);
        }

        let existing: Vec<&str> = requested
            .iter()
            .filter(|c| target.is_in_class_group(c))
            .map(ClassGroup::name)
            .collect();
        if !existing.is_empty() {
            return Err(CommandError::DuplicateClassGroups(join_sorted(existing)));
        }

        let names = join_sorted(requested.iter().map(ClassGroup::name));
        let edited = target.with_class_groups(target.class_groups().clone().union(requested));
        model.set_person(&target, edited)?;
        model.commit();

        Ok(CommandResult::new(format!(
            "Added class group(s) {} to {}",
            names,
            target.name()
        )))
    }
}

/// Withdraws the student at `index` from one or more class groups, together
/// with every assignment belonging to those classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteClassCommand {
    index: Index,
    class_groups: Option<OrdSet<ClassGroup>>,
}

impl DeleteClassCommand {
    pub const COMMAND_WORD: &'static str = "deleteclass";
    pub const USAGE: &'static str = "deleteclass: Removes class groups (and their assignments) from the student at the given index.\n\
        Parameters: INDEX c/CLASS [c/CLASS]...\n\
        Example: deleteclass 1 c/Math";

    pub fn new(index: Index, class_groups: Option<OrdSet<ClassGroup>>) -> Self {
        Self {
            index,
            class_groups,
        }
    }
}

impl Executable for DeleteClassCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let requested = self.class_groups.clone().unwrap_or_default();
        if requested.is_empty() {
            return Err(CommandError::NothingToDelete);
        }

        let missing: Vec<&str> = requested
            .iter()
            .filter(|c| !target.is_in_class_group(c))
            .map(ClassGroup::name)
            .collect();
        if !missing.is_empty() {
            return Err(CommandError::MissingClassGroups(join_sorted(missing)));
        }

        let class_groups = target
            .class_groups()
            .iter()
            .filter(|c| !requested.contains(*c))
            .cloned()
            .collect();
        let assignments = target
            .assignments()
            .iter()
            .filter(|a| !requested.contains(a.class_group()))
            .cloned()
            .collect();
        let edited = target
            .with_class_groups(class_groups)
            .with_assignments(assignments);

        let names = join_sorted(requested.iter().map(ClassGroup::name));
        model.set_person(&target, edited)?;
        model.commit();

        Ok(CommandResult::new(format!(
            "Deleted class group(s) {} from {}",
            names,
            target.name()
        )))
    }
}

/// Shows only the students enrolled in a class group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommand {
    class_group: ClassGroup,
}

impl FilterCommand {
    pub const COMMAND_WORD: &'static str = "filter";
    pub const USAGE: &'static str = "filter: Lists the students in a class group (case-insensitive).\n\
        Parameters: c/CLASS\n\
        Example: filter c/Math";

    pub fn new(class_group: ClassGroup) -> Self {
        Self { class_group }
    }
}

impl Executable for FilterCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_persons(PersonPredicate::InClassGroup(self.class_group.clone()));
        let count = model.filtered_persons().len();
        Ok(CommandResult::new(format!(
            "{} student(s) listed in class group {}",
            count,
            self.class_group.name()
        ))
        .with_redisplay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Level, Name, Person, Phone};
    use crate::store::RecordBook;

    fn class(name: &str) -> ClassGroup {
        ClassGroup::parse(name).unwrap()
    }

    fn alice() -> Person {
        let math = class("Math");
        Person::new(
            Name::parse("Alice").unwrap(),
            Phone::parse("911").unwrap(),
            Level::parse("Sec 3").unwrap(),
            OrdSet::unit(math.clone()),
            OrdSet::unit(Assignment::parse("hw1", math).unwrap()),
        )
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    fn model() -> Model {
        Model::new(RecordBook::from_persons(vec![alice()]).unwrap())
    }

    #[test]
    fn test_add_class_reports_existing_sorted() {
        let mut model = model();
        let requested = [class("science"), class("MATH")].into_iter().collect();

        let result = AddClassCommand::new(first(), Some(requested)).execute(&mut model);

        assert_eq!(
            result,
            Err(CommandError::DuplicateClassGroups("MATH".to_string()))
        );
        assert_eq!(model.filtered_persons()[0].class_groups().len(), 1);
    }

    #[test]
    fn test_add_class_with_empty_set() {
        let mut model = model();
        let result = AddClassCommand::new(first(), Some(OrdSet::new())).execute(&mut model);
        assert_eq!(result, Err(CommandError::NothingToAdd));
    }

    #[test]
    fn test_delete_class_cascades_to_assignments() {
        let mut model = model();
        DeleteClassCommand::new(first(), Some(OrdSet::unit(class("math"))))
            .execute(&mut model)
            .unwrap();

        let person = &model.filtered_persons()[0];
        assert!(person.class_groups().is_empty());
        assert!(person.assignments().is_empty());
        assert!(model.record_book().class_groups().is_empty());
    }

    #[test]
    fn test_delete_class_not_enrolled() {
        let mut model = model();
        let result =
            DeleteClassCommand::new(first(), Some(OrdSet::unit(class("Art")))).execute(&mut model);
        assert_eq!(
            result,
            Err(CommandError::MissingClassGroups("Art".to_string()))
        );
    }

    #[test]
    fn test_filter_counts_matches() {
        let mut model = model();
        let result = FilterCommand::new(class("MATH")).execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("1 student(s) listed"));
        assert!(result.redisplay);

        FilterCommand::new(class("Art")).execute(&mut model).unwrap();
        assert!(model.filtered_persons().is_empty());
    }
}
