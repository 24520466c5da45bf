use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern compiles"));

static LEVEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("level pattern compiles"));

/// A value rejected by one of the field validators.
///
/// The message is shown to the user verbatim, so each variant states the
/// constraint rather than the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,

    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    Phone,

    #[error("Levels should only contain alphanumeric characters and spaces, and it should not be blank")]
    Level,

    #[error("Class group names should only contain alphanumeric characters, spaces and hyphens, start with an alphanumeric character, and not be blank")]
    ClassGroup,

    #[error("Assignment names should only contain alphanumeric characters, spaces and hyphens, start with an alphanumeric character, and not be blank")]
    Assignment,
}

/// A student's full name. Compared exactly; see [`Name::eq_ignore_case`] for
/// the looser check used by duplicate warnings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if NAME_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::Name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// `alice  tan` becomes `Alice Tan`.
    pub fn title_case(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if any whitespace-separated word of the name equals `keyword`,
    /// ignoring case.
    pub fn contains_word(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.0
            .split_whitespace()
            .any(|word| word.to_lowercase() == keyword)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if PHONE_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::Phone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A grade or tier label such as `Sec 3` or `P5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(String);

impl Level {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if LEVEL_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::Level)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Level {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(Name::parse("Alice Tan").is_ok());
        assert!(Name::parse("R2D2").is_ok());
        assert_eq!(Name::parse(""), Err(FieldError::Name));
        assert_eq!(Name::parse(" Alice"), Err(FieldError::Name));
        assert_eq!(Name::parse("Alice*"), Err(FieldError::Name));
    }

    #[test]
    fn test_name_title_case() {
        let name = Name::parse("aLIce   tan").unwrap();
        assert_eq!(name.title_case(), "Alice Tan");
    }

    #[test]
    fn test_name_contains_word() {
        let name = Name::parse("Alice Tan").unwrap();
        assert!(name.contains_word("alice"));
        assert!(name.contains_word("TAN"));
        assert!(!name.contains_word("ali"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("91234567").is_ok());
        assert_eq!(Phone::parse("91"), Err(FieldError::Phone));
        assert_eq!(Phone::parse("9123 4567"), Err(FieldError::Phone));
        assert_eq!(Phone::parse("phone"), Err(FieldError::Phone));
    }

    #[test]
    fn test_level_validation() {
        assert!(Level::parse("Sec 3").is_ok());
        assert_eq!(Level::parse(""), Err(FieldError::Level));
        assert_eq!(Level::parse("-3"), Err(FieldError::Level));
    }

    #[test]
    fn test_name_rejects_invalid_json() {
        let result: Result<Name, _> = serde_json::from_str("\"@@\"");
        assert!(result.is_err());
    }
}
