//! Serialization tests for Command, Output and Error.
//!
//! Commands and outputs cross process boundaries as JSON, so each variant
//! must survive a round trip.

use serde_json::json;

use super::body;
use crate::types::IssueView;
use crate::{Command, Error, Output};
use tracker_core::{IssueId, Timestamp};

fn command_round_trip(cmd: Command) {
    let json = serde_json::to_string(&cmd).expect("Failed to serialize command");
    let restored: Command = serde_json::from_str(&json).expect("Failed to deserialize command");
    assert_eq!(cmd, restored);
}

fn output_round_trip(output: Output) {
    let json = serde_json::to_string(&output).expect("Failed to serialize output");
    let restored: Output = serde_json::from_str(&json).expect("Failed to deserialize output");
    assert_eq!(output, restored);
}

#[test]
fn test_commands() {
    command_round_trip(Command::ListIssues {
        project: "apitest".into(),
        query: vec![("open".into(), "true".into()), ("open".into(), "false".into())],
    });
    command_round_trip(Command::CreateIssue {
        project: "apitest".into(),
        fields: body(json!({"issue_title": "t", "open": false, "n": 3})),
    });
    command_round_trip(Command::UpdateIssue {
        project: "apitest".into(),
        fields: body(json!({"_id": "abc", "status_text": "done"})),
    });
    command_round_trip(Command::DeleteIssue {
        project: "apitest".into(),
        fields: body(json!({"_id": "abc"})),
    });
}

#[test]
fn test_command_missing_fields_default_to_empty() {
    let cmd: Command =
        serde_json::from_value(json!({"ListIssues": {"project": "apitest"}})).unwrap();
    assert_eq!(
        cmd,
        Command::ListIssues {
            project: "apitest".into(),
            query: vec![],
        }
    );
}

#[test]
fn test_command_rejects_unknown_fields() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "DeleteIssue": {"project": "apitest", "fields": {}, "force": true}
    }));
    assert!(result.is_err());
}

#[test]
fn test_outputs() {
    let view = IssueView {
        id: IssueId::new(),
        issue_title: "t".into(),
        issue_text: "x".into(),
        created_on: Timestamp::from_micros(1_700_000_000_123_456),
        updated_on: Timestamp::from_micros(1_700_000_000_223_456),
        created_by: "c".into(),
        assigned_to: String::new(),
        open: false,
        status_text: "closed".into(),
    };
    output_round_trip(Output::Issues(vec![]));
    output_round_trip(Output::Issues(vec![view.clone()]));
    output_round_trip(Output::Created(view));
    output_round_trip(Output::Updated { id: "abc".into() });
    output_round_trip(Output::Deleted { id: "abc".into() });
}

#[test]
fn test_errors() {
    for err in [
        Error::Validation,
        Error::MissingId,
        Error::NoUpdateFields { id: "a".into() },
        Error::UpdateFailed { id: "a".into() },
        Error::DeleteFailed { id: "a".into() },
        Error::LookupFailed { project: "p".into() },
    ] {
        let json = serde_json::to_string(&err).unwrap();
        let restored: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(err, restored);
    }
}
