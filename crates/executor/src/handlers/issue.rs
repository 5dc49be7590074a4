//! Issue command handlers.
//!
//! Each handler validates its input, shapes a store query or document, makes
//! exactly one store call, and maps the outcome to an [`Output`] or a
//! declared [`Error`]. Store failures never escape as anything else.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, info};
use tracker_core::{cast_string, is_truthy, IssueField, IssueId, NewIssue};
use tracker_storage::{
    Condition, DocumentStore, Filter, FilterValue, IssuePatch, StoreResult,
};

use crate::types::{Fields, IssueView};
use crate::{Error, Output, Result};

/// Handle ListIssues.
///
/// The filter is every query parameter as an equality condition, plus the
/// path project. A query that cannot be resolved is reported as a missing
/// project; zero matches is an empty list.
pub fn list_issues(
    store: &Arc<dyn DocumentStore>,
    project: String,
    query: Vec<(String, String)>,
) -> Result<Output> {
    let found = build_filter(&project, &query).and_then(|filter| store.find(&filter));
    match found {
        Ok(issues) => {
            debug!(project = %project, matched = issues.len(), "issues listed");
            Ok(Output::Issues(issues.iter().map(IssueView::from).collect()))
        }
        Err(e) => {
            debug!(project = %project, error = %e, "issue lookup failed");
            Err(Error::LookupFailed { project })
        }
    }
}

/// Handle CreateIssue.
///
/// `issue_title`, `issue_text` and `created_by` must be present and truthy.
/// `open` starts as `true` regardless of the body.
pub fn create_issue(
    store: &Arc<dyn DocumentStore>,
    project: String,
    fields: Fields,
) -> Result<Output> {
    let doc = new_issue(project, &fields)?;
    let issue = store.create(doc).map_err(|e| {
        debug!(error = %e, "issue rejected by store");
        Error::Validation
    })?;
    info!(project = %issue.project, id = %issue.id, "issue created");
    Ok(Output::Created(IssueView::from(issue)))
}

/// Handle UpdateIssue.
///
/// The effective-field check uses loose truthiness, so a JSON `open: false`
/// on its own counts as no update. The patch itself keeps every mutable
/// field that is not the empty string, which means a field cannot be
/// cleared through this path.
pub fn update_issue(
    store: &Arc<dyn DocumentStore>,
    project: String,
    fields: Fields,
) -> Result<Output> {
    let id = request_id(&fields).ok_or(Error::MissingId)?;

    let any_sent = IssueField::MUTABLE
        .iter()
        .any(|f| fields.get(f.name()).is_some_and(is_truthy));
    if !any_sent {
        return Err(Error::NoUpdateFields { id });
    }

    let patch = match IssuePatch::from_fields(&fields) {
        Ok(patch) => patch,
        Err(e) => {
            debug!(id = %id, error = %e, "update rejected");
            return Err(Error::UpdateFailed { id });
        }
    };
    let Ok(issue_id) = IssueId::parse(&id) else {
        debug!(id = %id, "update addressed a malformed id");
        return Err(Error::UpdateFailed { id });
    };

    match store.find_by_id_and_update(issue_id, &patch) {
        Ok(Some(issue)) => {
            info!(
                project = %project,
                id = %id,
                fields = ?patch.field_names(),
                version = issue.version,
                "issue updated"
            );
            Ok(Output::Updated { id })
        }
        Ok(None) => {
            debug!(id = %id, "update matched no issue");
            Err(Error::UpdateFailed { id })
        }
        Err(e) => {
            debug!(id = %id, error = %e, "update rejected by store");
            Err(Error::UpdateFailed { id })
        }
    }
}

/// Handle DeleteIssue.
///
/// The issue is removed by `_id` alone; the path project is not part of the
/// filter, so an issue can be deleted through any project's path.
pub fn delete_issue(
    store: &Arc<dyn DocumentStore>,
    project: String,
    fields: Fields,
) -> Result<Output> {
    let id = request_id(&fields).ok_or(Error::MissingId)?;
    let Ok(issue_id) = IssueId::parse(&id) else {
        debug!(id = %id, "delete addressed a malformed id");
        return Err(Error::DeleteFailed { id });
    };

    match store.find_one_and_delete(&Filter::by_id(issue_id)) {
        Ok(Some(issue)) => {
            info!(project = %project, owner = %issue.project, id = %id, "issue deleted");
            Ok(Output::Deleted { id })
        }
        Ok(None) => {
            debug!(id = %id, "delete matched no issue");
            Err(Error::DeleteFailed { id })
        }
        Err(e) => {
            debug!(id = %id, error = %e, "delete failed in store");
            Err(Error::DeleteFailed { id })
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Query parameters plus the path project, as one conjunction.
///
/// The project condition goes in last so it replaces any `project` query
/// parameter.
pub(crate) fn build_filter(project: &str, query: &[(String, String)]) -> StoreResult<Filter> {
    let mut filter = Filter::new();
    for (name, raw) in query {
        filter = filter.with(Condition::parse(name, raw)?);
    }
    Ok(filter.with(Condition::Field {
        field: IssueField::Project,
        value: FilterValue::Text(project.to_string()),
    }))
}

/// `_id` from a request body, rendered as text. Absent or falsy is `None`.
pub(crate) fn request_id(fields: &Fields) -> Option<String> {
    let value = fields.get(IssueField::Id.name()).filter(|v| is_truthy(v))?;
    Some(match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn new_issue(project: String, fields: &Fields) -> Result<NewIssue> {
    let required = |field: IssueField| -> Result<String> {
        match fields.get(field.name()) {
            Some(v) if is_truthy(v) => cast_string(field, v).map_err(|_| Error::Validation),
            _ => Err(Error::Validation),
        }
    };
    let optional = |field: IssueField| -> Result<String> {
        match fields.get(field.name()) {
            None | Some(JsonValue::Null) => Ok(String::new()),
            Some(v) => cast_string(field, v).map_err(|_| Error::Validation),
        }
    };

    Ok(NewIssue {
        project,
        issue_title: required(IssueField::IssueTitle)?,
        issue_text: required(IssueField::IssueText)?,
        created_by: required(IssueField::CreatedBy)?,
        assigned_to: optional(IssueField::AssignedTo)?,
        status_text: optional(IssueField::StatusText)?,
    })
}
