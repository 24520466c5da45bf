use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FieldError;

static CLASS_GROUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]*$").expect("class group pattern compiles")
});

/// A named class a student can be enrolled in.
///
/// Equality, ordering and hashing all use the lower-cased name, so `Math` and
/// `math` are the same class. The display form keeps whatever casing the
/// class was first written with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassGroup {
    name: String,
}

impl ClassGroup {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if CLASS_GROUP_PATTERN.is_match(value) {
            Ok(Self {
                name: value.to_string(),
            })
        } else {
            Err(FieldError::ClassGroup)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The case-folded name used for comparisons.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for ClassGroup {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ClassGroup {}

impl Hash for ClassGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ClassGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl TryFrom<String> for ClassGroup {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClassGroup> for String {
    fn from(class_group: ClassGroup) -> Self {
        class_group.name
    }
}

impl fmt::Display for ClassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
