//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. [`Output::to_body`]
//! renders the JSON body the HTTP layer sends back.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::types::IssueView;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Issues matching a list query, in store order
    Issues(Vec<IssueView>),

    /// The newly created issue
    Created(IssueView),

    /// An issue was updated
    Updated {
        /// Identifier as sent by the caller
        id: String,
    },

    /// An issue was deleted
    Deleted {
        /// Identifier as sent by the caller
        id: String,
    },
}

impl Output {
    /// JSON body for this output.
    ///
    /// Issues are rendered in their public shape; write acknowledgements as
    /// `{result, _id}`.
    pub fn to_body(&self) -> JsonValue {
        match self {
            Output::Issues(issues) => {
                JsonValue::Array(issues.iter().map(issue_body).collect())
            }
            Output::Created(issue) => issue_body(issue),
            Output::Updated { id } => json!({ "result": "successfully updated", "_id": id }),
            Output::Deleted { id } => json!({ "result": "successfully deleted", "_id": id }),
        }
    }
}

fn issue_body(issue: &IssueView) -> JsonValue {
    // IssueView has only strings, bools and string-serialized ids/timestamps
    serde_json::to_value(issue).unwrap_or(JsonValue::Null)
}
