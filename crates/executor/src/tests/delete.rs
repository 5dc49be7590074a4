//! DeleteIssue scenarios.

use serde_json::json;

use super::*;
use crate::Error;

fn delete(executor: &Executor, project: &str, fields: Fields) -> crate::Result<Output> {
    executor.execute(Command::DeleteIssue {
        project: project.to_string(),
        fields,
    })
}

#[test]
fn test_delete_removes_from_list() {
    let executor = Executor::ephemeral();
    let keep = create(&executor, "apitest", full_issue("Keep"));
    let gone = create(&executor, "apitest", full_issue("Gone"));
    let id = gone.id.to_string();

    let out = delete(&executor, "apitest", body(json!({"_id": id}))).unwrap();
    assert_eq!(
        out.to_body(),
        json!({"result": "successfully deleted", "_id": id})
    );

    assert_eq!(list(&executor, "apitest", &[]), vec![keep]);
    assert_eq!(fetch(&executor, "apitest", &id), None);
}

#[test]
fn test_delete_twice_fails_the_same_way() {
    let executor = Executor::ephemeral();
    let issue = create(&executor, "apitest", full_issue("Once"));
    let id = issue.id.to_string();

    delete(&executor, "apitest", body(json!({"_id": id}))).unwrap();
    let first = delete(&executor, "apitest", body(json!({"_id": id}))).unwrap_err();
    let second = delete(&executor, "apitest", body(json!({"_id": id}))).unwrap_err();

    assert_eq!(first, Error::DeleteFailed { id: id.clone() });
    assert_eq!(first, second);
    assert_eq!(
        second.to_body(),
        json!({"error": "could not delete", "_id": id})
    );
}

#[test]
fn test_delete_without_id() {
    let executor = Executor::ephemeral();
    create(&executor, "apitest", full_issue("Safe"));

    for fields in [Fields::new(), body(json!({"_id": ""}))] {
        let err = delete(&executor, "apitest", fields).unwrap_err();
        assert_eq!(err.to_body(), json!({"error": "missing _id"}));
    }
    assert_eq!(executor.store().count(), 1);
}

#[test]
fn test_delete_malformed_id() {
    let executor = Executor::ephemeral();
    let err = delete(&executor, "apitest", body(json!({"_id": "nope"}))).unwrap_err();
    assert_eq!(err, Error::DeleteFailed { id: "nope".into() });
}

#[test]
fn test_delete_ignores_path_project() {
    let executor = Executor::ephemeral();
    let issue = create(&executor, "apitest", full_issue("Reachable"));
    let id = issue.id.to_string();

    delete(&executor, "somewhere-else", body(json!({"_id": id}))).unwrap();
    assert!(list(&executor, "apitest", &[]).is_empty());
}

#[test]
fn test_lifecycle_open_closed_deleted() {
    let executor = Executor::ephemeral();
    let issue = create(&executor, "apitest", full_issue("Lifecycle"));
    let id = issue.id.to_string();
    assert!(issue.open);

    executor
        .execute(Command::UpdateIssue {
            project: "apitest".into(),
            fields: body(json!({"_id": id, "open": "false"})),
        })
        .unwrap();
    assert!(!fetch(&executor, "apitest", &id).unwrap().open);

    executor
        .execute(Command::UpdateIssue {
            project: "apitest".into(),
            fields: body(json!({"_id": id, "open": true})),
        })
        .unwrap();
    assert!(fetch(&executor, "apitest", &id).unwrap().open);

    delete(&executor, "apitest", body(json!({"_id": id}))).unwrap();
    assert_eq!(fetch(&executor, "apitest", &id), None);
}
