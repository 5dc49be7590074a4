//! Error types for command execution.
//!
//! Every failure of an issue operation is one of the variants below. None of
//! them is a transport fault: each is rendered as a JSON body by
//! [`Error::to_body`], and only [`Error::LookupFailed`] asks the transport for
//! a non-success status.
//!
//! | Variant | Operations | Body |
//! |---------|------------|------|
//! | `Validation` | create | `{error: "required field(s) missing"}` |
//! | `MissingId` | update, delete | `{error: "missing _id"}` |
//! | `NoUpdateFields` | update | `{error: "no update field(s) sent", _id}` |
//! | `UpdateFailed` | update | `{error: "could not update", _id}` |
//! | `DeleteFailed` | delete | `{error: "could not delete", _id}` |
//! | `LookupFailed` | list | `{error: "No project called <project> found"}` |
//! | `Internal` | any | `{error: <reason>}` |

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Command execution errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// A required creation field is absent, empty or not castable
    #[error("required field(s) missing")]
    Validation,

    /// `_id` is absent on update or delete
    #[error("missing _id")]
    MissingId,

    /// Update request names no effective field
    #[error("no update field(s) sent")]
    NoUpdateFields {
        /// Identifier echoed back to the caller
        id: String,
    },

    /// Identifier not found, or the write was rejected
    #[error("could not update")]
    UpdateFailed {
        /// Identifier echoed back to the caller
        id: String,
    },

    /// Identifier not found on removal
    #[error("could not delete")]
    DeleteFailed {
        /// Identifier echoed back to the caller
        id: String,
    },

    /// The list query did not resolve against the store
    #[error("No project called {project} found")]
    LookupFailed {
        /// Project named in the request path
        project: String,
    },

    /// A command produced an output of the wrong kind
    #[error("{reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// The identifier echoed in the error body, if this variant carries one
    pub fn id(&self) -> Option<&str> {
        match self {
            Error::NoUpdateFields { id }
            | Error::UpdateFailed { id }
            | Error::DeleteFailed { id } => Some(id),
            _ => None,
        }
    }

    /// `true` for the one failure the transport reports as not-found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LookupFailed { .. })
    }

    /// JSON body for this error: `{error}` or `{error, _id}`
    pub fn to_body(&self) -> JsonValue {
        match self.id() {
            Some(id) => json!({ "error": self.to_string(), "_id": id }),
            None => json!({ "error": self.to_string() }),
        }
    }
}
