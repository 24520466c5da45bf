use super::util::{
    parse_assignment, parse_assignments_for_edit, parse_class_group, parse_index, parse_indices,
};
use super::{
    tokenize, ArgumentMultimap, ParseError, ALL_PREFIXES, PREFIX_ASSIGNMENT, PREFIX_CLASS,
    PREFIX_LEVEL, PREFIX_NAME, PREFIX_PHONE,
};
use crate::commands::{
    AssignAllCommand, AssignCommand, MarkCommand, UnassignAllCommand, UnassignCommand,
    UnmarkCommand,
};
use crate::index::Index;
use crate::models::{Assignment, ClassGroup};

pub(super) fn parse_assign(args: &str) -> Result<AssignCommand, ParseError> {
    let (index, class_group, map) = index_class_and_assignments(args, AssignCommand::USAGE)?;
    let assignments = parse_assignments_for_edit(map.all_values(PREFIX_ASSIGNMENT), &class_group)?;
    Ok(AssignCommand::new(index, class_group, assignments))
}

pub(super) fn parse_unassign(args: &str) -> Result<UnassignCommand, ParseError> {
    let (index, class_group, map) = index_class_and_assignments(args, UnassignCommand::USAGE)?;
    let assignments = parse_assignments_for_edit(map.all_values(PREFIX_ASSIGNMENT), &class_group)?;
    Ok(UnassignCommand::new(index, class_group, assignments))
}

pub(super) fn parse_assign_all(args: &str) -> Result<AssignAllCommand, ParseError> {
    let map = checked_class_and_assignment(args, AssignAllCommand::USAGE)?;
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(AssignAllCommand::USAGE));
    }
    let (class_group, assignment) = single_assignment(&map)?;
    Ok(AssignAllCommand::new(class_group, assignment))
}

pub(super) fn parse_unassign_all(args: &str) -> Result<UnassignAllCommand, ParseError> {
    let map = checked_class_and_assignment(args, UnassignAllCommand::USAGE)?;
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(UnassignAllCommand::USAGE));
    }
    let (class_group, assignment) = single_assignment(&map)?;
    Ok(UnassignAllCommand::new(class_group, assignment))
}

pub(super) fn parse_mark(args: &str) -> Result<MarkCommand, ParseError> {
    let (indices, assignment) = indices_and_assignment(args, MarkCommand::USAGE)?;
    Ok(MarkCommand::new(indices, assignment))
}

pub(super) fn parse_unmark(args: &str) -> Result<UnmarkCommand, ParseError> {
    let (indices, assignment) = indices_and_assignment(args, UnmarkCommand::USAGE)?;
    Ok(UnmarkCommand::new(indices, assignment))
}

/// `INDEX c/CLASS a/ASSIGNMENT...` as taken by `assign` and `unassign`.
fn index_class_and_assignments(
    args: &str,
    usage: &'static str,
) -> Result<(Index, ClassGroup, ArgumentMultimap), ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat(usage))?;
    if !map.contains(PREFIX_CLASS) || !map.contains(PREFIX_ASSIGNMENT) {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    map.verify_no_invalid_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL])?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CLASS])?;

    let class_group = parse_class_group(map.value(PREFIX_CLASS).unwrap_or_default())?;
    Ok((index, class_group, map))
}

/// Tokenizes `args` and checks that exactly one `c/` and one `a/` are present
/// and nothing else. The preamble is left to the caller.
fn checked_class_and_assignment(
    args: &str,
    usage: &'static str,
) -> Result<ArgumentMultimap, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    if !map.contains(PREFIX_CLASS) || !map.contains(PREFIX_ASSIGNMENT) {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    map.verify_no_invalid_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL])?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CLASS, PREFIX_ASSIGNMENT])?;
    Ok(map)
}

fn single_assignment(map: &ArgumentMultimap) -> Result<(ClassGroup, Assignment), ParseError> {
    let class_group = parse_class_group(map.value(PREFIX_CLASS).unwrap_or_default())?;
    let assignment = parse_assignment(
        map.value(PREFIX_ASSIGNMENT).unwrap_or_default(),
        &class_group,
    )?;
    Ok((class_group, assignment))
}

/// `INDEX[-INDEX] [INDEX]... c/CLASS a/ASSIGNMENT` as taken by `mark` and
/// `unmark`.
fn indices_and_assignment(
    args: &str,
    usage: &'static str,
) -> Result<(Vec<Index>, Assignment), ParseError> {
    let map = checked_class_and_assignment(args, usage)?;
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    let indices = parse_indices(map.preamble())?;
    let (_, assignment) = single_assignment(&map)?;
    Ok((indices, assignment))
}
