//! Partial updates
//!
//! An [`IssuePatch`] holds one optional value per mutable field. `None` means
//! "leave untouched"; only `Some` fields are written. Applying a patch always
//! refreshes `updated_at` and bumps the version, and never touches `id`,
//! `project` or `created_at`.

use serde_json::{Map, Value as JsonValue};
use tracker_core::{cast_bool, cast_string, is_empty_string, Issue, IssueField, Timestamp};

use crate::error::StoreResult;

/// Typed merge patch over the mutable issue fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePatch {
    /// New title
    pub issue_title: Option<String>,
    /// New body text
    pub issue_text: Option<String>,
    /// New author
    pub created_by: Option<String>,
    /// New assignee
    pub assigned_to: Option<String>,
    /// Open/closed toggle
    pub open: Option<bool>,
    /// New status line
    pub status_text: Option<String>,
}

impl IssuePatch {
    /// Build a patch from a flat request body.
    ///
    /// Fields absent from the body, and fields sent as the empty string, are
    /// left out of the patch. Keys that are not mutable fields (`_id`,
    /// `project`, unknown names) are ignored. Present values are cast to the
    /// field type; a value that does not fit is a validation error.
    pub fn from_fields(fields: &Map<String, JsonValue>) -> StoreResult<Self> {
        let mut patch = IssuePatch::default();
        for field in IssueField::MUTABLE {
            let Some(value) = fields.get(field.name()) else {
                continue;
            };
            if is_empty_string(value) {
                continue;
            }
            match field {
                IssueField::IssueTitle => patch.issue_title = Some(cast_string(field, value)?),
                IssueField::IssueText => patch.issue_text = Some(cast_string(field, value)?),
                IssueField::CreatedBy => patch.created_by = Some(cast_string(field, value)?),
                IssueField::AssignedTo => patch.assigned_to = Some(cast_string(field, value)?),
                IssueField::StatusText => patch.status_text = Some(cast_string(field, value)?),
                IssueField::Open => patch.open = Some(cast_bool(field, value)?),
                _ => {}
            }
        }
        Ok(patch)
    }

    /// `true` when no field would be written
    pub fn is_empty(&self) -> bool {
        self == &IssuePatch::default()
    }

    /// Names of the fields this patch writes, in request order
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.issue_title.is_some() {
            names.push(IssueField::IssueTitle.name());
        }
        if self.issue_text.is_some() {
            names.push(IssueField::IssueText.name());
        }
        if self.created_by.is_some() {
            names.push(IssueField::CreatedBy.name());
        }
        if self.assigned_to.is_some() {
            names.push(IssueField::AssignedTo.name());
        }
        if self.open.is_some() {
            names.push(IssueField::Open.name());
        }
        if self.status_text.is_some() {
            names.push(IssueField::StatusText.name());
        }
        names
    }

    /// Write the patch into `issue`, stamping `updated_at` with a time
    /// strictly after its previous value.
    pub fn apply(&self, issue: &mut Issue) {
        if let Some(v) = &self.issue_title {
            issue.issue_title = v.clone();
        }
        if let Some(v) = &self.issue_text {
            issue.issue_text = v.clone();
        }
        if let Some(v) = &self.created_by {
            issue.created_by = v.clone();
        }
        if let Some(v) = &self.assigned_to {
            issue.assigned_to = v.clone();
        }
        if let Some(v) = self.open {
            issue.open = v;
        }
        if let Some(v) = &self.status_text {
            issue.status_text = v.clone();
        }
        issue.updated_at = Timestamp::now_after(issue.updated_at);
        issue.version += 1;
    }
}
