use thiserror::Error;

use crate::commands::CommandError;
use crate::parser::ParseError;
use crate::storage::StorageError;

/// Anything [`crate::logic::Logic::execute`] can fail with. The message is
/// the one shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;
