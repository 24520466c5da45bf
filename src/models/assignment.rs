use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ClassGroup, FieldError};

static ASSIGNMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]*$").expect("assignment pattern compiles")
});

/// A piece of work set for one class group.
///
/// Identity is the pair (class group, name); the `marked` flag is not part of
/// it. A set of assignments therefore holds exactly one entry per name within
/// a class, and toggling the mark means removing the old entry and inserting
/// the re-flagged copy.
///
/// Names are stored lower-cased: `HW1` and `hw1` are the same assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AssignmentRecord", into = "AssignmentRecord")]
pub struct Assignment {
    name: String,
    class_group: ClassGroup,
    marked: bool,
}

impl Assignment {
    /// Builds an unmarked assignment for `class_group`.
    pub fn parse(name: &str, class_group: ClassGroup) -> Result<Self, FieldError> {
        if !ASSIGNMENT_PATTERN.is_match(name) {
            return Err(FieldError::Assignment);
        }
        Ok(Self {
            name: name.to_lowercase(),
            class_group,
            marked: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_group(&self) -> &ClassGroup {
        &self.class_group
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn marked(&self) -> Self {
        Self {
            marked: true,
            ..self.clone()
        }
    }

    pub fn unmarked(&self) -> Self {
        Self {
            marked: false,
            ..self.clone()
        }
    }

    pub fn with_marked(&self, marked: bool) -> Self {
        if marked {
            self.marked()
        } else {
            self.unmarked()
        }
    }

    /// Stricter than `==`: the mark and the class group's casing must match
    /// as well.
    pub fn is_identical(&self, other: &Assignment) -> bool {
        self == other
            && self.marked == other.marked
            && self.class_group.name() == other.class_group.name()
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.class_group == other.class_group && self.name == other.name
    }
}

impl Eq for Assignment {}

impl Hash for Assignment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class_group.hash(state);
        self.name.hash(state);
    }
}

impl PartialOrd for Assignment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Assignment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class_group
            .cmp(&other.class_group)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.marked { "x" } else { " " };
        write!(f, "[{}] {} ({})", status, self.name, self.class_group.name())
    }
}

/// Serialized form of an [`Assignment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssignmentRecord {
    name: String,
    class_group: String,
    #[serde(default)]
    marked: bool,
}

impl TryFrom<AssignmentRecord> for Assignment {
    type Error = FieldError;

    fn try_from(record: AssignmentRecord) -> Result<Self, Self::Error> {
        let class_group = ClassGroup::parse(&record.class_group)?;
        Ok(Self::parse(&record.name, class_group)?.with_marked(record.marked))
    }
}

impl From<Assignment> for AssignmentRecord {
    fn from(assignment: Assignment) -> Self {
        Self {
            name: assignment.name,
            class_group: assignment.class_group.into(),
            marked: assignment.marked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math() -> ClassGroup {
        ClassGroup::parse("Math").unwrap()
    }

    #[test]
    fn test_name_is_lowercased() {
        let assignment = Assignment::parse("HW1", math()).unwrap();
        assert_eq!(assignment.name(), "hw1");
        assert!(!assignment.is_marked());
    }

    #[test]
    fn test_equality_ignores_marked_flag() {
        let assignment = Assignment::parse("hw1", math()).unwrap();
        assert_eq!(assignment, assignment.marked());
        assert_eq!(assignment.cmp(&assignment.marked()), Ordering::Equal);
    }

    #[test]
    fn test_is_identical_sees_marked_flag() {
        let assignment = Assignment::parse("hw1", math()).unwrap();
        assert!(assignment.is_identical(&Assignment::parse("HW1", math()).unwrap()));
        assert!(!assignment.is_identical(&assignment.marked()));
        assert!(assignment.is_identical(&assignment.marked().unmarked()));
    }

    #[test]
    fn test_equality_includes_class_group() {
        let math_hw = Assignment::parse("hw1", math()).unwrap();
        let science_hw = Assignment::parse("hw1", ClassGroup::parse("Science").unwrap()).unwrap();
        assert_ne!(math_hw, science_hw);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let assignment = Assignment::parse("hw1", math()).unwrap();
        let once = assignment.marked();
        let twice = once.marked();
        assert!(twice.is_marked());
        assert_eq!(once.is_marked(), twice.is_marked());

        let unmarked = twice.unmarked().unmarked();
        assert!(!unmarked.is_marked());
        assert_eq!(unmarked, assignment);
    }

    #[test]
    fn test_round_trips_marked_flag_through_json() {
        let assignment = Assignment::parse("hw1", math()).unwrap().marked();
        let json = serde_json::to_string(&assignment).unwrap();
        let restored: Assignment = serde_json::from_str(&json).unwrap();
        assert!(restored.is_marked());
        assert_eq!(restored.class_group().name(), "Math");
    }

    #[test]
    fn test_rejects_invalid_name() {
        assert_eq!(
            Assignment::parse(" hw", math()).unwrap_err(),
            FieldError::Assignment
        );
    }
}
