use serde::{Deserialize, Serialize};

use super::{StoreError, UniqueClassGroupList, UniquePersonList};
use crate::models::{ClassGroup, Person};

/// The canonical record set: every student plus the registry of class groups
/// in use.
///
/// Cloning is cheap (both lists are persistent vectors), which is what lets
/// the version manager keep a full snapshot per commit.
///
/// The class registry follows the students: a class is registered when its
/// first member arrives and dropped when its last member leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordBookData", into = "RecordBookData")]
pub struct RecordBook {
    persons: UniquePersonList,
    class_groups: UniqueClassGroupList,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self, StoreError> {
        let mut book = Self::new();
        book.persons.set_persons(persons)?;
        book.sync_class_groups();
        Ok(book)
    }

    pub fn persons(&self) -> &UniquePersonList {
        &self.persons
    }

    pub fn class_groups(&self) -> &UniqueClassGroupList {
        &self.class_groups
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn has_class_group(&self, class_group: &ClassGroup) -> bool {
        self.class_groups.contains(class_group)
    }

    /// Same students in the same order, compared with
    /// [`Person::is_identical`]. Unlike `==` this notices mark changes.
    pub fn is_identical(&self, other: &RecordBook) -> bool {
        self.persons.len() == other.persons.len()
            && self
                .persons
                .iter()
                .zip(other.persons.iter())
                .all(|(a, b)| a.is_identical(b))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), StoreError> {
        self.persons.add(person)?;
        self.sync_class_groups();
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), StoreError> {
        self.persons.set_person(target, edited)?;
        self.sync_class_groups();
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, StoreError> {
        let removed = self.persons.remove(target)?;
        self.sync_class_groups();
        Ok(removed)
    }

    fn sync_class_groups(&mut self) {
        self.class_groups = self
            .persons
            .iter()
            .flat_map(|p| p.class_groups().iter().cloned())
            .collect();
    }
}

/// On-disk shape of a [`RecordBook`]. The class registry is rebuilt from the
/// students on load, so only the students are written.
#[derive(Debug, Serialize, Deserialize)]
struct RecordBookData {
    #[serde(default)]
    persons: Vec<Person>,
}

impl TryFrom<RecordBookData> for RecordBook {
    type Error = StoreError;

    fn try_from(data: RecordBookData) -> Result<Self, Self::Error> {
        Self::from_persons(data.persons)
    }
}

impl From<RecordBook> for RecordBookData {
    fn from(book: RecordBook) -> Self {
        Self {
            persons: book.persons.iter().cloned().collect(),
        }
    }
}
