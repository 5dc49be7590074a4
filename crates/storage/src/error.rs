//! Store error types

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors reported by a [`DocumentStore`](crate::DocumentStore).
///
/// An update or delete that matches nothing is not an error: those operations
/// return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A write was rejected because a value does not fit its field
    #[error("validation failed: {reason}")]
    Validation {
        /// What was wrong
        reason: String,
    },

    /// The query could not be resolved against the collection
    #[error("lookup failed: {reason}")]
    Lookup {
        /// What was wrong
        reason: String,
    },
}

impl StoreError {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        StoreError::Validation {
            reason: reason.into(),
        }
    }

    /// Create a lookup error
    pub fn lookup(reason: impl Into<String>) -> Self {
        StoreError::Lookup {
            reason: reason.into(),
        }
    }
}

impl From<tracker_core::Error> for StoreError {
    fn from(err: tracker_core::Error) -> Self {
        StoreError::Validation {
            reason: err.to_string(),
        }
    }
}
