use im::OrdSet;

use super::util::{
    parse_assignments, parse_class_groups, parse_index, parse_level, parse_name, parse_phone,
};
use super::{
    tokenize, ParseError, ALL_PREFIXES, PREFIX_ASSIGNMENT, PREFIX_CLASS, PREFIX_LEVEL,
    PREFIX_NAME, PREFIX_PHONE,
};
use crate::commands::{AddCommand, DeleteCommand, EditCommand, EditPersonDescriptor};
use crate::models::Person;

pub(super) fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL];
    if !map.preamble().is_empty() || !required.iter().all(|p| map.contains(*p)) {
        return Err(ParseError::InvalidCommandFormat(AddCommand::USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&required)?;

    let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
    let phone = parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?;
    let level = parse_level(map.value(PREFIX_LEVEL).unwrap_or_default())?;
    let class_groups = parse_class_groups(map.all_values(PREFIX_CLASS))?;

    let assignments = if map.contains(PREFIX_ASSIGNMENT) {
        let class_group = match map.all_values(PREFIX_CLASS) {
            [_] => class_groups.iter().next().cloned(),
            _ => None,
        }
        .ok_or(ParseError::AssignmentWithoutClassGroup)?;
        parse_assignments(map.all_values(PREFIX_ASSIGNMENT), &class_group)?
    } else {
        OrdSet::new()
    };

    Ok(AddCommand::new(Person::new(
        name,
        phone,
        level,
        class_groups,
        assignments,
    )))
}

pub(super) fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidCommandFormat(EditCommand::USAGE))?;
    map.verify_no_invalid_prefixes_for(&[PREFIX_CLASS, PREFIX_ASSIGNMENT])?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_LEVEL])?;

    let mut descriptor = EditPersonDescriptor::new();
    if let Some(name) = map.value(PREFIX_NAME) {
        descriptor.set_name(parse_name(name)?);
    }
    if let Some(phone) = map.value(PREFIX_PHONE) {
        descriptor.set_phone(parse_phone(phone)?);
    }
    if let Some(level) = map.value(PREFIX_LEVEL) {
        descriptor.set_level(parse_level(level)?);
    }
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

pub(super) fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
    let index =
        parse_index(args).map_err(|_| ParseError::InvalidCommandFormat(DeleteCommand::USAGE))?;
    Ok(DeleteCommand::new(index))
}
