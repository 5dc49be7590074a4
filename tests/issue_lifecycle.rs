//! Issue lifecycle through the public facade.
//!
//! An issue moves `nonexistent -> open -> closed -> open -> nonexistent`,
//! with every step observed through list queries.

use std::sync::Arc;

use issue_tracker::{Command, DocumentStore, Error, Fields, MemoryStore, Output, Tracker};
use serde_json::{json, Value};

fn body(v: Value) -> Fields {
    v.as_object().cloned().unwrap()
}

fn new_issue(title: &str) -> Fields {
    body(json!({
        "issue_title": title,
        "issue_text": "Lifecycle test",
        "created_by": "fCC",
    }))
}

#[test]
fn issue_moves_through_every_state() {
    let tracker = Tracker::ephemeral();

    let issue = tracker.create_issue("apitest", new_issue("Lifecycle")).unwrap();
    let id = issue.id.to_string();
    assert!(issue.open);
    assert_eq!(tracker.list_issues("apitest", &[("open", "true")]).unwrap().len(), 1);

    tracker
        .update_issue("apitest", body(json!({"_id": id, "open": "false"})))
        .unwrap();
    assert!(tracker.list_issues("apitest", &[("open", "true")]).unwrap().is_empty());
    let closed = tracker.list_issues("apitest", &[("open", "false")]).unwrap();
    assert_eq!(closed.len(), 1);
    assert!(closed[0].updated_on > closed[0].created_on);

    tracker
        .update_issue("apitest", body(json!({"_id": id, "open": true})))
        .unwrap();
    assert_eq!(tracker.list_issues("apitest", &[("open", "true")]).unwrap().len(), 1);

    tracker.delete_issue("apitest", body(json!({"_id": id}))).unwrap();
    assert!(tracker.list_issues("apitest", &[]).unwrap().is_empty());
    assert_eq!(
        tracker.delete_issue("apitest", body(json!({"_id": id}))),
        Err(Error::DeleteFailed { id })
    );
}

#[test]
fn projects_are_isolated_for_reads() {
    let tracker = Tracker::ephemeral();
    tracker.create_issue("alpha", new_issue("A1")).unwrap();
    tracker.create_issue("alpha", new_issue("A2")).unwrap();
    tracker.create_issue("beta", new_issue("B1")).unwrap();

    let alpha: Vec<String> = tracker
        .list_issues("alpha", &[])
        .unwrap()
        .into_iter()
        .map(|i| i.issue_title)
        .collect();
    assert_eq!(alpha, vec!["A1", "A2"]);
    assert_eq!(tracker.list_issues("beta", &[]).unwrap().len(), 1);
}

#[test]
fn command_interface_matches_typed_interface() {
    let store = Arc::new(MemoryStore::new());
    let tracker = Tracker::new(store.clone());

    let out = tracker
        .executor()
        .execute(Command::CreateIssue {
            project: "apitest".into(),
            fields: new_issue("Via command"),
        })
        .unwrap();
    let Output::Created(created) = out else {
        panic!("expected Created");
    };

    let listed = tracker.list_issues("apitest", &[]).unwrap();
    assert_eq!(listed, vec![created]);
    assert_eq!(store.count(), 1);
}

#[test]
fn wire_bodies_match_the_contract() {
    let tracker = Tracker::ephemeral();
    let issue = tracker.create_issue("apitest", new_issue("Wire")).unwrap();
    let id = issue.id.to_string();

    let updated = tracker
        .executor()
        .execute(Command::UpdateIssue {
            project: "apitest".into(),
            fields: body(json!({"_id": id, "status_text": "done"})),
        })
        .unwrap();
    assert_eq!(
        updated.to_body(),
        json!({"result": "successfully updated", "_id": id})
    );

    let err = tracker
        .executor()
        .execute(Command::UpdateIssue {
            project: "apitest".into(),
            fields: body(json!({"_id": id})),
        })
        .unwrap_err();
    assert_eq!(
        err.to_body(),
        json!({"error": "no update field(s) sent", "_id": id})
    );
}
