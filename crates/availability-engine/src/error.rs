//! Error types for availability-engine operations.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AvailabilityError {
    #[error("{0} is not in a valid date format")]
    InvalidDateFormat(String),

    #[error("Invalid offset: {0}")]
    InvalidOffsetFormat(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid display format: {0}")]
    InvalidDisplayFormat(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
