use super::{person_at, CommandError, CommandResult, Executable};
use crate::index::Index;
use crate::models::{Level, Name, Person, Phone};
use crate::store::Model;

const WARNING_SAME_NAME: &str = "Warning: another student has the same name.";
const WARNING_SAME_PHONE: &str = "Warning: another student has the same phone number.";

/// Adds a student.
///
/// A student with the same name and phone is rejected outright. Sharing only
/// the name (in any case) or only the phone is allowed, with a warning line
/// appended to the feedback for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a student to the record book.\n\
        Parameters: n/NAME p/PHONE l/LEVEL [c/CLASS]... [a/ASSIGNMENT]...\n\
        Assignments require exactly one class.\n\
        Example: add n/John Doe p/98765432 l/Sec 3 c/Math a/hw1";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Executable for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }

        let warnings = soft_duplicate_warnings(model, &self.person, None, true, true);
        model.add_person(self.person.clone())?;
        model.commit();

        let mut feedback = format!("New student added: {}", self.person);
        for warning in warnings {
            feedback.push('\n');
            feedback.push_str(warning);
        }
        Ok(CommandResult::new(feedback).with_redisplay())
    }
}

/// Field edits collected before an [`EditCommand`] is built. Unset fields
/// keep the student's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    name: Option<Name>,
    phone: Option<Phone>,
    level: Option<Level>,
}

impl EditPersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = Some(phone);
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = Some(level);
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.level.is_some()
    }

    fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(level) = &self.level {
            edited = edited.with_level(level.clone());
        }
        edited
    }
}

/// Edits the name, phone or level of the student at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the student at the given index.\n\
        Parameters: INDEX [n/NAME] [p/PHONE] [l/LEVEL]\n\
        Example: edit 1 p/91234567 l/Sec 4";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Executable for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        let warnings = soft_duplicate_warnings(
            model,
            &edited,
            Some(&target),
            self.descriptor.name.is_some(),
            self.descriptor.phone.is_some(),
        );
        model.set_person(&target, edited.clone())?;
        model.commit();

        let mut feedback = format!("Edited Student: {}", edited);
        for warning in warnings {
            feedback.push('\n');
            feedback.push_str(warning);
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Removes the student at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the student at the given index.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Executable for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        model.delete_person(&target)?;
        model.commit();
        Ok(CommandResult::new(format!("Deleted Student: {}", target)))
    }
}

/// Warnings for a candidate record that shares its name (ignoring case) or
/// phone with some other student. `original` is the record being edited and
/// is left out of the comparison.
fn soft_duplicate_warnings(
    model: &Model,
    candidate: &Person,
    original: Option<&Person>,
    check_name: bool,
    check_phone: bool,
) -> Vec<&'static str> {
    let others: Vec<&Person> = model
        .persons()
        .filter(|p| original.map_or(true, |o| !p.is_same_person(o)))
        .collect();

    let mut warnings = Vec::new();
    if check_name && others.iter().any(|p| p.name().eq_ignore_case(candidate.name())) {
        warnings.push(WARNING_SAME_NAME);
    }
    if check_phone && others.iter().any(|p| p.phone() == candidate.phone()) {
        warnings.push(WARNING_SAME_PHONE);
    }
    warnings
}
