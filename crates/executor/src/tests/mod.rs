//! Test modules for the executor crate.

mod create;
mod delete;
mod serialization;

use serde_json::{json, Value as JsonValue};

use crate::types::{Fields, IssueView};
use crate::{Command, Executor, Output};

/// Turn a `json!` object literal into a request body.
pub(crate) fn body(v: JsonValue) -> Fields {
    v.as_object().cloned().expect("body must be a JSON object")
}

/// A complete creation body with a distinguishing title.
pub(crate) fn full_issue(title: &str) -> Fields {
    body(json!({
        "issue_title": title,
        "issue_text": "Steps to reproduce",
        "created_by": "alice",
        "assigned_to": "bob",
        "status_text": "triage",
    }))
}

/// Create an issue through the executor and return its public shape.
pub(crate) fn create(executor: &Executor, project: &str, fields: Fields) -> IssueView {
    match executor.execute(Command::CreateIssue {
        project: project.to_string(),
        fields,
    }) {
        Ok(Output::Created(issue)) => issue,
        other => panic!("expected Created, got {:?}", other),
    }
}

/// List issues through the executor.
pub(crate) fn list(executor: &Executor, project: &str, query: &[(&str, &str)]) -> Vec<IssueView> {
    match executor.execute(Command::ListIssues {
        project: project.to_string(),
        query: query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }) {
        Ok(Output::Issues(issues)) => issues,
        other => panic!("expected Issues, got {:?}", other),
    }
}

/// Fetch one issue by id within a project.
pub(crate) fn fetch(executor: &Executor, project: &str, id: &str) -> Option<IssueView> {
    list(executor, project, &[("_id", id)]).into_iter().next()
}
