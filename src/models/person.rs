use std::fmt;

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::{Assignment, ClassGroup, Level, Name, Phone};

/// A student record.
///
/// `Person` is an immutable value: every edit goes through one of the `with_*`
/// methods and yields a new record, which the store then swaps in for the old
/// one. Two notions of equality apply:
///
/// - [`Person::is_same_person`]: name and phone match exactly. This is the
///   "same real student" check the store uses to reject duplicates.
/// - `==`: every field matches, including class groups and assignments.
///
/// `==` inherits the looseness of [`Assignment`] equality and so cannot see
/// a mark change. [`Person::is_identical`] can.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    level: Level,
    #[serde(default)]
    class_groups: OrdSet<ClassGroup>,
    #[serde(default)]
    assignments: OrdSet<Assignment>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        level: Level,
        class_groups: OrdSet<ClassGroup>,
        assignments: OrdSet<Assignment>,
    ) -> Self {
        Self {
            name,
            phone,
            level,
            class_groups,
            assignments,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn class_groups(&self) -> &OrdSet<ClassGroup> {
        &self.class_groups
    }

    pub fn assignments(&self) -> &OrdSet<Assignment> {
        &self.assignments
    }

    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone
    }

    /// Full equality plus the mark on every assignment and the exact casing
    /// of every class group.
    pub fn is_identical(&self, other: &Person) -> bool {
        self == other
            && self
                .class_groups
                .iter()
                .zip(other.class_groups.iter())
                .all(|(a, b)| a.name() == b.name())
            && self
                .assignments
                .iter()
                .zip(other.assignments.iter())
                .all(|(a, b)| a.is_identical(b))
    }

    pub fn is_in_class_group(&self, class_group: &ClassGroup) -> bool {
        self.class_groups.contains(class_group)
    }

    /// The stored copy of `assignment`, carrying its current mark.
    pub fn find_assignment(&self, assignment: &Assignment) -> Option<&Assignment> {
        self.assignments.iter().find(|a| *a == assignment)
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: Phone) -> Self {
        Self {
            phone,
            ..self.clone()
        }
    }

    pub fn with_level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    pub fn with_class_groups(&self, class_groups: OrdSet<ClassGroup>) -> Self {
        Self {
            class_groups,
            ..self.clone()
        }
    }

    pub fn with_assignments(&self, assignments: OrdSet<Assignment>) -> Self {
        Self {
            assignments,
            ..self.clone()
        }
    }

    /// Replaces the stored copy of `assignment` with `replacement`.
    ///
    /// The old entry is removed before the new one goes in, so the set never
    /// holds two entries for the same assignment.
    pub fn with_replaced_assignment(&self, assignment: &Assignment, replacement: Assignment) -> Self {
        let mut assignments = self.assignments.clone();
        assignments.remove(assignment);
        assignments.insert(replacement);
        self.with_assignments(assignments)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Level: {}; Classes: ",
            self.name, self.phone, self.level
        )?;
        for class_group in self.class_groups.iter() {
            write!(f, "{}", class_group)?;
        }
        f.write_str("; Assignments: ")?;
        let assignments: Vec<String> = self.assignments.iter().map(|a| a.to_string()).collect();
        f.write_str(&assignments.join(", "))
    }
}
