//! Error types for the core data model
//!
//! These errors come from parsing identifiers and casting loosely typed
//! request values into issue field types. We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the core data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier string is not a well-formed issue id
    #[error("invalid issue id: {value:?}")]
    InvalidId {
        /// The rejected input
        value: String,
    },

    /// A value could not be cast to the field's stored type
    #[error("cannot cast {field}: {reason}")]
    Cast {
        /// Field being cast
        field: String,
        /// Why the cast failed
        reason: String,
    },
}

impl Error {
    /// Create a cast error for a named field
    pub fn cast(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Cast {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
