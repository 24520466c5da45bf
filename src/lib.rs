//! Command-driven record manager for students, the class groups they attend
//! and the assignments set in each class.

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod logic;
pub mod models;
pub mod parser;
pub mod sample;
pub mod storage;
pub mod store;

pub use error::{Error, Result};
pub use logic::Logic;
