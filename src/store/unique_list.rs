use im::Vector;

use super::StoreError;
use crate::models::{ClassGroup, Person};

/// Students in insertion order, with no two sharing an identity.
///
/// Identity means [`Person::is_same_person`]: name and phone. Targets for
/// replacement and removal are located with [`Person::is_identical`], so a
/// stale copy of a record (even one differing only in a mark) is treated as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePersonList {
    persons: Vector<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<(), StoreError> {
        if self.contains(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons.push_back(person);
        Ok(())
    }

    /// Swaps `target` for `edited`, keeping its position.
    ///
    /// `edited` may keep the target's identity; it may not take on the
    /// identity of any other student.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), StoreError> {
        let index = self.position(target).ok_or(StoreError::PersonNotFound)?;
        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons.set(index, edited);
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> Result<Person, StoreError> {
        let index = self.position(target).ok_or(StoreError::PersonNotFound)?;
        Ok(self.persons.remove(index))
    }

    /// Replaces the whole list, rejecting input with repeated identities.
    pub fn set_persons(&mut self, persons: impl IntoIterator<Item = Person>) -> Result<(), StoreError> {
        let mut replacement = Self::new();
        for person in persons {
            replacement.add(person)?;
        }
        *self = replacement;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.persons.get(index)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p.is_identical(target))
    }
}

/// Class groups known to the store, unique by (case-insensitive) name, in
/// order of first appearance. Built by collecting; repeats are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueClassGroupList {
    class_groups: Vector<ClassGroup>,
}

impl UniqueClassGroupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class_group: &ClassGroup) -> bool {
        self.class_groups.iter().any(|c| c == class_group)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, ClassGroup> {
        self.class_groups.iter()
    }

    pub fn len(&self) -> usize {
        self.class_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_groups.is_empty()
    }
}

impl FromIterator<ClassGroup> for UniqueClassGroupList {
    fn from_iter<I: IntoIterator<Item = ClassGroup>>(iter: I) -> Self {
        let mut list = Self::new();
        for class_group in iter {
            if !list.contains(&class_group) {
                list.class_groups.push_back(class_group);
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use im::OrdSet;

    use super::*;
    use crate::models::{Level, Name, Phone};

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Level::parse("Sec 3").unwrap(),
            OrdSet::new(),
            OrdSet::new(),
        )
    }

    #[test]
    fn test_add_rejects_same_identity() {
        let mut list = UniquePersonList::new();
        let alice = person("Alice", "911");
        list.add(alice.clone()).unwrap();

        let promoted = alice.with_level(Level::parse("Sec 4").unwrap());
        assert_eq!(list.add(promoted), Err(StoreError::DuplicatePerson));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_person_keeps_position() {
        let mut list = UniquePersonList::new();
        let alice = person("Alice", "911");
        let bob = person("Bob", "922");
        list.add(alice.clone()).unwrap();
        list.add(bob.clone()).unwrap();

        let promoted = alice.with_level(Level::parse("Sec 4").unwrap());
        list.set_person(&alice, promoted.clone()).unwrap();

        assert_eq!(list.get(0), Some(&promoted));
        assert_eq!(list.get(1), Some(&bob));
    }

    #[test]
    fn test_set_person_rejects_identity_collision() {
        let mut list = UniquePersonList::new();
        let alice = person("Alice", "911");
        let bob = person("Bob", "922");
        list.add(alice.clone()).unwrap();
        list.add(bob).unwrap();

        let clash = person("Bob", "922");
        assert_eq!(list.set_person(&alice, clash), Err(StoreError::DuplicatePerson));
    }

    #[test]
    fn test_missing_target_is_not_found() {
        let mut list = UniquePersonList::new();
        let alice = person("Alice", "911");
        assert_eq!(
            list.set_person(&alice, alice.clone()),
            Err(StoreError::PersonNotFound)
        );
        assert_eq!(list.remove(&alice), Err(StoreError::PersonNotFound));
    }

    #[test]
    fn test_set_persons_rejects_duplicates_without_change() {
        let mut list = UniquePersonList::new();
        list.add(person("Carol", "933")).unwrap();

        let result = list.set_persons(vec![person("Alice", "911"), person("Alice", "911")]);

        assert_eq!(result, Err(StoreError::DuplicatePerson));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_stale_marked_copy_is_not_found() {
        let math = ClassGroup::parse("Math").unwrap();
        let hw = crate::models::Assignment::parse("hw1", math.clone()).unwrap();
        let alice = person("Alice", "911")
            .with_class_groups(OrdSet::unit(math))
            .with_assignments(OrdSet::unit(hw.clone()));
        let marked = alice.with_replaced_assignment(&hw, hw.marked());
        let mut list = UniquePersonList::new();
        list.add(marked).unwrap();

        assert_eq!(list.remove(&alice), Err(StoreError::PersonNotFound));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_class_group_list_collects_case_insensitively() {
        let list: UniqueClassGroupList = ["Math", "Science", "MATH"]
            .iter()
            .map(|c| ClassGroup::parse(c).unwrap())
            .collect();

        let names: Vec<&str> = list.iter().map(ClassGroup::name).collect();
        assert_eq!(names, ["Math", "Science"]);
        assert!(list.contains(&ClassGroup::parse("math").unwrap()));
    }
}
