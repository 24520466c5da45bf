//! Domain models for classbook.
//!
//! # Core Concepts
//!
//! - [`Person`]: an immutable student record identified by name and phone.
//!   Edits always produce a new `Person`.
//! - [`ClassGroup`]: a class a student belongs to, compared by name without
//!   regard to case.
//! - [`Assignment`]: work set for one class group. Identity is the class and
//!   the name; the mark flag is carried alongside but never compared.
//!
//! Field newtypes ([`Name`], [`Phone`], [`Level`]) validate on construction,
//! including when deserialized, so a `Person` can never hold an invalid value.

mod assignment;
mod class_group;
mod fields;
mod person;

pub use assignment::*;
pub use class_group::*;
pub use fields::*;
pub use person::*;
