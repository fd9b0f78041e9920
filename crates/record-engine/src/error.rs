//! Service Error Taxonomy

use record_validator::ValidationError;
use storage::StorageError;
use thiserror::Error;

/// Typed failure of a lifecycle operation
///
/// Every operation returns either a typed result or one of these; no
/// failure is swallowed.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed payload or parameters; reported, never retried
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Identifier addresses no document
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Store-layer failure, propagated with its message; safe for the
    /// caller to retry (the engine performs no retry of its own)
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
