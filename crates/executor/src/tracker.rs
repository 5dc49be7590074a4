//! High-level typed wrapper for the Executor.
//!
//! [`Tracker`] wraps the [`Executor`] and the [`Command`]/[`Output`] enums
//! with one typed method per operation.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tracker_executor::Tracker;
//!
//! let tracker = Tracker::ephemeral();
//! let body = json!({"issue_title": "Crash", "issue_text": "on start", "created_by": "ann"});
//! let issue = tracker.create_issue("apitest", body.as_object().unwrap().clone()).unwrap();
//! assert!(issue.open);
//!
//! let listed = tracker.list_issues("apitest", &[("open", "true")]).unwrap();
//! assert_eq!(listed.len(), 1);
//! ```

use std::sync::Arc;

use tracker_storage::DocumentStore;

use crate::types::{Fields, IssueView};
use crate::{Command, Error, Executor, Output, Result};

/// Typed issue operations over an [`Executor`].
#[derive(Debug, Clone)]
pub struct Tracker {
    executor: Executor,
}

impl Tracker {
    /// Create a tracker over an existing store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// Create a tracker over a fresh in-memory store
    pub fn ephemeral() -> Self {
        Self {
            executor: Executor::ephemeral(),
        }
    }

    /// The executor behind this tracker
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Issues of `project` matching every `(name, value)` pair.
    pub fn list_issues(&self, project: &str, query: &[(&str, &str)]) -> Result<Vec<IssueView>> {
        let cmd = Command::ListIssues {
            project: project.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        match self.executor.execute(cmd)? {
            Output::Issues(issues) => Ok(issues),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListIssues".into(),
            }),
        }
    }

    /// Create an issue in `project`.
    pub fn create_issue(&self, project: &str, fields: Fields) -> Result<IssueView> {
        let cmd = Command::CreateIssue {
            project: project.to_string(),
            fields,
        };
        match self.executor.execute(cmd)? {
            Output::Created(issue) => Ok(issue),
            _ => Err(Error::Internal {
                reason: "Unexpected output for CreateIssue".into(),
            }),
        }
    }

    /// Partially update the issue named by `_id` in `fields`; returns the id.
    pub fn update_issue(&self, project: &str, fields: Fields) -> Result<String> {
        let cmd = Command::UpdateIssue {
            project: project.to_string(),
            fields,
        };
        match self.executor.execute(cmd)? {
            Output::Updated { id } => Ok(id),
            _ => Err(Error::Internal {
                reason: "Unexpected output for UpdateIssue".into(),
            }),
        }
    }

    /// Delete the issue named by `_id` in `fields`; returns the id.
    pub fn delete_issue(&self, project: &str, fields: Fields) -> Result<String> {
        let cmd = Command::DeleteIssue {
            project: project.to_string(),
            fields,
        };
        match self.executor.execute(cmd)? {
            Output::Deleted { id } => Ok(id),
            _ => Err(Error::Internal {
                reason: "Unexpected output for DeleteIssue".into(),
            }),
        }
    }
}
