//! Date primitive error types

use thiserror::Error;

pub type DateResult<T> = Result<T, DateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Raised by conversions that have no text for the invalid instant
    /// (`toISOString` throws a RangeError for it).
    #[error("Invalid time value")]
    InvalidTime,

    #[error("Invalid time zone: {0}")]
    InvalidZone(String),
}
