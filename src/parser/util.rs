use std::collections::BTreeSet;

use im::OrdSet;

use super::ParseError;
use crate::index::Index;
use crate::models::{Assignment, ClassGroup, Level, Name, Phone};

/// Parses a single one-based index.
pub fn parse_index(value: &str) -> Result<Index, ParseError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    value
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Longest `START-END` range accepted, well beyond any list on screen.
pub const MAX_INDEX_RANGE: usize = 10_000;

/// Parses a whitespace-separated list of indices and `START-END` ranges.
///
/// The result is de-duplicated and sorted: `"3 1-2 2"` gives `[1, 2, 3]`.
pub fn parse_indices(value: &str) -> Result<Vec<Index>, ParseError> {
    let mut indices = BTreeSet::new();
    for token in value.split_whitespace() {
        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_index_token(start, token)?;
                let end = parse_index_token(end, token)?;
                if end < start {
                    return Err(ParseError::InvalidIndexRange {
                        start: start.one_based(),
                        end: end.one_based(),
                    });
                }
                if end.zero_based() - start.zero_based() >= MAX_INDEX_RANGE {
                    return Err(ParseError::IndexRangeTooLarge {
                        start: start.one_based(),
                        end: end.one_based(),
                    });
                }
                indices.extend((start.zero_based()..=end.zero_based()).map(Index::from_zero_based));
            }
            None => {
                indices.insert(parse_index_token(token, token)?);
            }
        }
    }
    if indices.is_empty() {
        return Err(ParseError::InvalidIndex);
    }
    Ok(indices.into_iter().collect())
}

/// One number inside an index list. Anything other than plain digits is
/// malformed; zero is rejected as an invalid index.
fn parse_index_token(value: &str, token: &str) -> Result<Index, ParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedIndex(token.to_string()));
    }
    let number = value
        .parse::<usize>()
        .map_err(|_| ParseError::MalformedIndex(token.to_string()))?;
    Index::from_one_based(number).ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(value: &str) -> Result<Name, ParseError> {
    Ok(Name::parse(value.trim())?)
}

pub fn parse_phone(value: &str) -> Result<Phone, ParseError> {
    Ok(Phone::parse(value.trim())?)
}

pub fn parse_level(value: &str) -> Result<Level, ParseError> {
    Ok(Level::parse(value.trim())?)
}

pub fn parse_class_group(value: &str) -> Result<ClassGroup, ParseError> {
    Ok(ClassGroup::parse(value.trim())?)
}

pub fn parse_class_groups(values: &[String]) -> Result<OrdSet<ClassGroup>, ParseError> {
    values.iter().map(|v| parse_class_group(v)).collect()
}

/// `None` when no value was given, an empty set for a single blank value,
/// otherwise every value parsed.
pub fn parse_class_groups_for_edit(
    values: &[String],
) -> Result<Option<OrdSet<ClassGroup>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(OrdSet::new())),
        _ => parse_class_groups(values).map(Some),
    }
}

pub fn parse_assignment(value: &str, class_group: &ClassGroup) -> Result<Assignment, ParseError> {
    Ok(Assignment::parse(value.trim(), class_group.clone())?)
}

pub fn parse_assignments(
    values: &[String],
    class_group: &ClassGroup,
) -> Result<OrdSet<Assignment>, ParseError> {
    values
        .iter()
        .map(|v| parse_assignment(v, class_group))
        .collect()
}

/// Same contract as [`parse_class_groups_for_edit`].
pub fn parse_assignments_for_edit(
    values: &[String],
    class_group: &ClassGroup,
) -> Result<Option<OrdSet<Assignment>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(OrdSet::new())),
        _ => parse_assignments(values, class_group).map(Some),
    }
}
