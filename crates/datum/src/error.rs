//! Wrapper error types

use datum_native::DateError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatumError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatumError {
    /// A setter argument resolved to no values at all (for example a
    /// derivation returning an empty sequence).
    #[error("{setter} called without any field values")]
    EmptyArguments { setter: &'static str },

    #[error(transparent)]
    Native(#[from] DateError),
}
