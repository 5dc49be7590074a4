//! CreateIssue scenarios.

use serde_json::json;

use super::*;
use crate::Error;

#[test]
fn test_create_echoes_every_field() {
    let executor = Executor::ephemeral();
    let issue = create(&executor, "apitest", full_issue("Crash on start"));

    assert_eq!(issue.issue_title, "Crash on start");
    assert_eq!(issue.issue_text, "Steps to reproduce");
    assert_eq!(issue.created_by, "alice");
    assert_eq!(issue.assigned_to, "bob");
    assert_eq!(issue.status_text, "triage");
    assert!(issue.open);
    assert_eq!(issue.id.to_string().len(), 32);
    assert_eq!(issue.created_on, issue.updated_on);
}

#[test]
fn test_create_defaults_optional_fields() {
    let executor = Executor::ephemeral();
    let issue = create(
        &executor,
        "apitest",
        body(json!({
            "issue_title": "Only required",
            "issue_text": "text",
            "created_by": "carol",
        })),
    );

    assert_eq!(issue.assigned_to, "");
    assert_eq!(issue.status_text, "");
    assert!(issue.open);
}

#[test]
fn test_create_ignores_open_in_body() {
    let executor = Executor::ephemeral();
    let mut fields = full_issue("Closed on arrival?");
    fields.insert("open".into(), json!(false));
    let issue = create(&executor, "apitest", fields);
    assert!(issue.open);
}

#[test]
fn test_create_takes_project_from_path() {
    let executor = Executor::ephemeral();
    let mut fields = full_issue("Where do I live");
    fields.insert("project".into(), json!("elsewhere"));
    let issue = create(&executor, "apitest", fields);

    assert_eq!(fetch(&executor, "apitest", &issue.id.to_string()), Some(issue));
    assert!(list(&executor, "elsewhere", &[]).is_empty());
}

#[test]
fn test_create_missing_required_persists_nothing() {
    let executor = Executor::ephemeral();

    for missing in ["issue_title", "issue_text", "created_by"] {
        let mut fields = full_issue("Incomplete");
        fields.remove(missing);
        let result = executor.execute(Command::CreateIssue {
            project: "apitest".into(),
            fields,
        });
        assert_eq!(result, Err(Error::Validation), "absent {missing}");

        let mut fields = full_issue("Incomplete");
        fields.insert(missing.to_string(), json!(""));
        let result = executor.execute(Command::CreateIssue {
            project: "apitest".into(),
            fields,
        });
        assert_eq!(result, Err(Error::Validation), "empty {missing}");
    }

    assert!(list(&executor, "apitest", &[]).is_empty());
    assert_eq!(executor.store().count(), 0);
}

#[test]
fn test_create_error_body() {
    let executor = Executor::ephemeral();
    let err = executor
        .execute(Command::CreateIssue {
            project: "apitest".into(),
            fields: Fields::new(),
        })
        .unwrap_err();
    assert_eq!(err.to_body(), json!({"error": "required field(s) missing"}));
}

#[test]
fn test_create_assigns_distinct_ids() {
    let executor = Executor::ephemeral();
    let a = create(&executor, "apitest", full_issue("one"));
    let b = create(&executor, "apitest", full_issue("two"));
    assert_ne!(a.id, b.id);
}
