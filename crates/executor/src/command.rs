//! Command enum defining all issue operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code
//!
//! Every command is scoped by the `project` path segment of the request.

use serde::{Deserialize, Serialize};

use crate::types::Fields;

/// A command is a self-contained, serializable operation on one project's
/// issues.
///
/// | Command | HTTP | Returns |
/// |---------|------|---------|
/// | `ListIssues` | GET | `Output::Issues` |
/// | `CreateIssue` | POST | `Output::Created` |
/// | `UpdateIssue` | PUT | `Output::Updated` |
/// | `DeleteIssue` | DELETE | `Output::Deleted` |
///
/// # Example
///
/// ```
/// use tracker_executor::Command;
///
/// let cmd = Command::ListIssues {
///     project: "apitest".into(),
///     query: vec![("open".into(), "true".into())],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// List issues of a project matching every query parameter.
    /// Returns: `Output::Issues`
    ListIssues {
        /// Project from the path
        project: String,
        /// Raw query parameters, in request order
        #[serde(default)]
        query: Vec<(String, String)>,
    },

    /// Create an issue in a project.
    /// Returns: `Output::Created`
    CreateIssue {
        /// Project from the path
        project: String,
        /// Request body
        #[serde(default)]
        fields: Fields,
    },

    /// Partially update an issue identified by `_id` in the body.
    /// Returns: `Output::Updated`
    UpdateIssue {
        /// Project from the path; not used to scope the write
        project: String,
        /// Request body, `_id` plus the fields to change
        #[serde(default)]
        fields: Fields,
    },

    /// Delete an issue identified by `_id` in the body.
    /// Returns: `Output::Deleted`
    DeleteIssue {
        /// Project from the path; not used to scope the removal
        project: String,
        /// Request body, `_id` only
        #[serde(default)]
        fields: Fields,
    },
}

impl Command {
    /// Operation name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListIssues { .. } => "list",
            Command::CreateIssue { .. } => "create",
            Command::UpdateIssue { .. } => "update",
            Command::DeleteIssue { .. } => "delete",
        }
    }

    /// Project the command is addressed to
    pub fn project(&self) -> &str {
        match self {
            Command::ListIssues { project, .. }
            | Command::CreateIssue { project, .. }
            | Command::UpdateIssue { project, .. }
            | Command::DeleteIssue { project, .. } => project,
        }
    }
}
