use std::collections::HashMap;
use std::fmt;

use super::ParseError;

/// A field marker such as `n/`. Only recognised when preceded by whitespace,
/// so `a/b` inside a value is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_LEVEL: Prefix = Prefix::new("l/");
pub const PREFIX_CLASS: Prefix = Prefix::new("c/");
pub const PREFIX_ASSIGNMENT: Prefix = Prefix::new("a/");

pub const ALL_PREFIXES: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_LEVEL,
    PREFIX_CLASS,
    PREFIX_ASSIGNMENT,
];

/// Tokenized arguments: the free-text preamble plus every value given for
/// each prefix, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.to_string())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }

    /// Fails if any of `prefixes` was given at all.
    pub fn verify_no_invalid_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let present: Vec<String> = prefixes
            .iter()
            .filter(|p| self.contains(**p))
            .map(|p| p.to_string())
            .collect();
        if present.is_empty() {
            Ok(())
        } else {
            Err(ParseError::InvalidPrefixes(present))
        }
    }
}

/// Splits `args` on the given prefixes.
///
/// ```text
/// " 1 c/Math a/hw1 a/hw2"  ->  preamble "1", c/ ["Math"], a/ ["hw1", "hw2"]
/// ```
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // A leading space lets a prefix at the very start be found like any other.
    let args = format!(" {}", args);

    let positions: Vec<(usize, Prefix)> = args
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .filter_map(|(at, c)| {
            let start = at + c.len_utf8();
            prefixes
                .iter()
                .find(|p| args[start..].starts_with(p.as_str()))
                .map(|&p| (start, p))
        })
        .collect();

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[start..end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  some preamble ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "some preamble");
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn test_values_in_order() {
        let map = tokenize(" 1 c/Math a/hw1 a/ hw2 ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_CLASS), Some("Math"));
        assert_eq!(map.all_values(PREFIX_ASSIGNMENT), ["hw1", "hw2"]);
        assert_eq!(map.value(PREFIX_ASSIGNMENT), Some("hw2"));
    }

    #[test]
    fn test_prefix_at_start_without_space() {
        let map = tokenize("n/Alice Tan p/911", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Alice Tan"));
        assert_eq!(map.value(PREFIX_PHONE), Some("911"));
    }

    #[test]
    fn test_any_whitespace_before_prefix() {
        let map = tokenize("1\tc/Math\na/hw1\u{3000}a/hw2", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_CLASS), Some("Math"));
        assert_eq!(map.all_values(PREFIX_ASSIGNMENT), ["hw1", "hw2"]);
    }

    #[test]
    fn test_prefix_inside_word_is_not_split() {
        let map = tokenize(" n/Alice/n/Tan", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("Alice/n/Tan"));
    }

    #[test]
    fn test_empty_value() {
        let map = tokenize(" 1 a/", &ALL_PREFIXES);
        assert_eq!(map.all_values(PREFIX_ASSIGNMENT), [""]);
    }

    #[test]
    fn test_unlisted_prefix_stays_in_text() {
        let map = tokenize(" 1 c/Math n/Bob", &[PREFIX_CLASS]);
        assert_eq!(map.value(PREFIX_CLASS), Some("Math n/Bob"));
    }

    #[test]
    fn test_verify_no_duplicate_prefixes() {
        let map = tokenize(" n/A n/B p/1 p/2 l/3", &ALL_PREFIXES);
        assert_eq!(
            map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL]),
            Err(ParseError::DuplicatePrefixes(vec!["n/".into(), "p/".into()]))
        );
        assert!(map.verify_no_duplicate_prefixes_for(&[PREFIX_LEVEL]).is_ok());
    }

    #[test]
    fn test_verify_no_invalid_prefixes() {
        let map = tokenize(" 1 c/Math", &ALL_PREFIXES);
        assert_eq!(
            map.verify_no_invalid_prefixes_for(&[PREFIX_CLASS, PREFIX_ASSIGNMENT]),
            Err(ParseError::InvalidPrefixes(vec!["c/".into()]))
        );
        assert!(map.verify_no_invalid_prefixes_for(&[PREFIX_NAME]).is_ok());
    }
}
