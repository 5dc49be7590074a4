//! Supporting types for commands and outputs.
//!
//! These types are used in command parameters and output values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracker_core::{Issue, IssueId, Timestamp};

/// Flat key/value request body.
///
/// Form-encoded bodies carry every value as a string; JSON bodies keep
/// their JSON types.
pub type Fields = Map<String, JsonValue>;

/// Public shape of an issue.
///
/// Field order is the wire order. The store's `created_at` / `updated_at`
/// are exposed as `created_on` / `updated_on`; `project` and the store's
/// version counter are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueView {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: IssueId,
    /// Short title
    pub issue_title: String,
    /// Body text
    pub issue_text: String,
    /// Creation time
    pub created_on: Timestamp,
    /// Last successful write
    pub updated_on: Timestamp,
    /// Author
    pub created_by: String,
    /// Assignee, empty when unassigned
    pub assigned_to: String,
    /// `false` once closed
    pub open: bool,
    /// Free-form status line
    pub status_text: String,
}

impl From<&Issue> for IssueView {
    fn from(issue: &Issue) -> Self {
        IssueView {
            id: issue.id,
            issue_title: issue.issue_title.clone(),
            issue_text: issue.issue_text.clone(),
            created_on: issue.created_at,
            updated_on: issue.updated_at,
            created_by: issue.created_by.clone(),
            assigned_to: issue.assigned_to.clone(),
            open: issue.open,
            status_text: issue.status_text.clone(),
        }
    }
}

impl From<Issue> for IssueView {
    fn from(issue: Issue) -> Self {
        IssueView::from(&issue)
    }
}
