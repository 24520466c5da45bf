use super::util::{parse_class_group, parse_class_groups_for_edit, parse_index};
use super::{
    tokenize, ArgumentMultimap, ParseError, Prefix, ALL_PREFIXES, PREFIX_ASSIGNMENT, PREFIX_CLASS,
    PREFIX_LEVEL, PREFIX_NAME, PREFIX_PHONE,
};
use crate::commands::{AddClassCommand, DeleteClassCommand, FilterCommand};
use crate::index::Index;

const NON_CLASS_PREFIXES: [Prefix; 4] =
    [PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL, PREFIX_ASSIGNMENT];

pub(super) fn parse_add_class(args: &str) -> Result<AddClassCommand, ParseError> {
    let (index, map) = index_with_classes(args, AddClassCommand::USAGE)?;
    let class_groups = parse_class_groups_for_edit(map.all_values(PREFIX_CLASS))?;
    Ok(AddClassCommand::new(index, class_groups))
}

pub(super) fn parse_delete_class(args: &str) -> Result<DeleteClassCommand, ParseError> {
    let (index, map) = index_with_classes(args, DeleteClassCommand::USAGE)?;
    let class_groups = parse_class_groups_for_edit(map.all_values(PREFIX_CLASS))?;
    Ok(DeleteClassCommand::new(index, class_groups))
}

pub(super) fn parse_filter(args: &str) -> Result<FilterCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    if !map.preamble().is_empty() || !map.contains(PREFIX_CLASS) {
        return Err(ParseError::InvalidCommandFormat(FilterCommand::USAGE));
    }
    map.verify_no_invalid_prefixes_for(&NON_CLASS_PREFIXES)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CLASS])?;

    let class_group = parse_class_group(map.value(PREFIX_CLASS).unwrap_or_default())?;
    Ok(FilterCommand::new(class_group))
}

/// Shared shape of `addclass` and `deleteclass`: `INDEX c/CLASS...`.
fn index_with_classes(
    args: &str,
    usage: &'static str,
) -> Result<(Index, ArgumentMultimap), ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat(usage))?;
    if !map.contains(PREFIX_CLASS) {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    map.verify_no_invalid_prefixes_for(&NON_CLASS_PREFIXES)?;
    Ok((index, map))
}
