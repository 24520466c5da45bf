//! The in-memory record store.
//!
//! [`Model`] owns the canonical [`RecordBook`], the predicate selecting which
//! students are on display, the derived filtered view, and the undo/redo
//! [`VersionManager`]. Commands mutate the canonical book through `Model`;
//! the filtered view is kept in step here and never touched directly.

mod predicate;
mod record_book;
mod unique_list;
mod versions;

use std::fmt;

use thiserror::Error;

pub use predicate::*;
pub use record_book::*;
pub use unique_list::*;
pub use versions::*;

use crate::models::Person;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Operation would result in duplicate students")]
    DuplicatePerson,

    #[error("Student not found")]
    PersonNotFound,
}

/// Callback invoked with the filtered view after every change to it.
pub type ViewListener = Box<dyn FnMut(&[Person])>;

pub struct Model {
    book: RecordBook,
    predicate: PersonPredicate,
    filtered: Vec<Person>,
    versions: VersionManager<RecordBook>,
    listeners: Vec<ViewListener>,
}

impl Model {
    /// Starts a session on `book`, which also becomes the oldest undo state.
    pub fn new(book: RecordBook) -> Self {
        let filtered = book.persons().iter().cloned().collect();
        Self {
            versions: VersionManager::new(book.clone()),
            book,
            predicate: PersonPredicate::ShowAll,
            filtered,
            listeners: Vec::new(),
        }
    }

    // ============================================================
    // Canonical records
    // ============================================================

    pub fn record_book(&self) -> &RecordBook {
        &self.book
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.book.persons().iter()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    /// Adds a student and resets the view to show everyone, so the new
    /// record is visible.
    pub fn add_person(&mut self, person: Person) -> Result<(), StoreError> {
        tracing::debug!(name = %person.name(), "Adding student");
        self.book.add_person(person)?;
        self.update_filtered_persons(PersonPredicate::ShowAll);
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<(), StoreError> {
        tracing::debug!(name = %target.name(), "Deleting student");
        self.book.remove_person(target)?;
        if let Some(index) = self.filtered.iter().position(|p| p.is_identical(target)) {
            self.filtered.remove(index);
        }
        self.notify();
        Ok(())
    }

    /// Replaces `target` with `edited` in the canonical list and, if `target`
    /// is on display, in the filtered view at the same position. An edited
    /// record that no longer satisfies the predicate drops out of the view.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), StoreError> {
        tracing::debug!(name = %target.name(), "Replacing student");
        self.book.set_person(target, edited.clone())?;
        self.patch_view(target, edited);
        self.notify();
        Ok(())
    }

    /// Applies several replacements as one step: either all land or none do.
    pub fn set_persons(&mut self, replacements: Vec<(Person, Person)>) -> Result<(), StoreError> {
        let mut next = self.book.clone();
        for (target, edited) in &replacements {
            next.set_person(target, edited.clone())?;
        }
        tracing::debug!(count = replacements.len(), "Replacing students");
        self.book = next;
        for (target, edited) in replacements {
            self.patch_view(&target, edited);
        }
        self.notify();
        Ok(())
    }

    pub fn clear(&mut self) {
        tracing::debug!("Clearing record book");
        self.set_record_book(RecordBook::new());
    }

    pub fn set_record_book(&mut self, book: RecordBook) {
        self.book = book;
        self.refresh_view();
    }

    // ============================================================
    // Filtered view
    // ============================================================

    pub fn filtered_persons(&self) -> &[Person] {
        &self.filtered
    }

    pub fn predicate(&self) -> &PersonPredicate {
        &self.predicate
    }

    pub fn update_filtered_persons(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
        self.refresh_view();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Person]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn refresh_view(&mut self) {
        self.filtered = match &self.predicate {
            PersonPredicate::ShowAll => self.book.persons().iter().cloned().collect(),
            predicate => self
                .book
                .persons()
                .iter()
                .filter(|p| predicate.test(p))
                .cloned()
                .collect(),
        };
        self.notify();
    }

    fn patch_view(&mut self, target: &Person, edited: Person) {
        let Some(index) = self.filtered.iter().position(|p| p.is_identical(target)) else {
            return;
        };
        if self.predicate.test(&edited) {
            self.filtered[index] = edited;
        } else {
            self.filtered.remove(index);
        }
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.filtered);
        }
    }

    // ============================================================
    // Versions
    // ============================================================

    /// Records the current book as a new undo point.
    pub fn commit(&mut self) {
        tracing::info!(students = self.book.persons().len(), "Committing version");
        self.versions.commit(self.book.clone());
    }

    pub fn can_undo(&self) -> bool {
        self.versions.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.versions.can_redo()
    }

    /// Restores the previous commit and shows every student.
    pub fn undo(&mut self) -> Result<(), VersionError> {
        let snapshot = self.versions.undo()?.clone();
        tracing::info!("Restored previous version");
        self.book = snapshot;
        self.update_filtered_persons(PersonPredicate::ShowAll);
        Ok(())
    }

    /// Re-applies the last undone commit and shows every student.
    pub fn redo(&mut self) -> Result<(), VersionError> {
        let snapshot = self.versions.redo()?.clone();
        tracing::info!("Restored undone version");
        self.book = snapshot;
        self.update_filtered_persons(PersonPredicate::ShowAll);
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(RecordBook::new())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("book", &self.book)
            .field("predicate", &self.predicate)
            .field("filtered", &self.filtered.len())
            .finish_non_exhaustive()
    }
}
