use thiserror::Error;

use crate::store::StoreError;

/// A command that parsed fine but cannot run against the current records.
///
/// Every variant is raised before the command mutates anything, so the store
/// is unchanged whenever one of these comes back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The student index provided is invalid")]
    InvalidPersonIndex,

    #[error("This student already exists in the record book")]
    DuplicatePerson,

    #[error("Student not in class group {0}")]
    NotInClassGroup(String),

    #[error("Student is already in class group(s): {0}")]
    DuplicateClassGroups(String),

    #[error("Student is not in class group(s): {0}")]
    MissingClassGroups(String),

    #[error("Student already has assignment(s): {0}")]
    DuplicateAssignments(String),

    #[error("Student does not have assignment(s): {0}")]
    MissingAssignments(String),

    #[error("There is nothing to add.")]
    NothingToAdd,

    #[error("There is nothing to delete.")]
    NothingToDelete,

    #[error("No students found in class group {0}")]
    NoStudentsInClassGroup(String),

    #[error("All students in class group {class_group} are already assigned {assignment}")]
    AlreadyAssigned {
        class_group: String,
        assignment: String,
    },

    #[error("All students in class group {class_group} are already unassigned {assignment}")]
    AlreadyUnassigned {
        class_group: String,
        assignment: String,
    },

    #[error("Assignment {assignment} not found for {name}")]
    AssignmentNotFound { assignment: String, name: String },

    #[error("Assignment {0} is already marked")]
    AlreadyMarked(String),

    #[error("Assignment {0} is already unmarked")]
    AlreadyUnmarked(String),

    #[error("There is no previous version to undo.")]
    NothingToUndo,

    #[error("There is no undone version to redo.")]
    NothingToRedo,

    #[error(transparent)]
    Store(#[from] StoreError),
}
