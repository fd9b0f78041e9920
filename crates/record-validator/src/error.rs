//! Validation Error Types

use thiserror::Error;

/// Errors during payload validation, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent from the payload
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Timestamp field present but unparseable
    #[error("{field} is not a valid timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// Numeric field present but not coercible to a finite number
    #[error("{field} is not a number: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    /// Text field present but empty
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
