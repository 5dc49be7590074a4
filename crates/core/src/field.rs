//! Issue field names and loose value casting
//!
//! Request bodies arrive either form-encoded (every value a string) or as JSON
//! (values keep their JSON type). Both are carried as `serde_json::Value`, and
//! this module casts them to the stored type of each field.
//!
//! Casting rules:
//!
//! | Stored type | Accepted | Rejected |
//! |-------------|----------|----------|
//! | string | strings, numbers, booleans (rendered as text) | null, arrays, objects |
//! | boolean | `true`/`false`, `"true"`/`"false"`, `"1"`/`"0"`, `"yes"`/`"no"`, `1`/`0` | everything else |

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// Every named field of an issue, using the public (wire) names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    /// `_id`
    Id,
    /// `project`
    Project,
    /// `issue_title`
    IssueTitle,
    /// `issue_text`
    IssueText,
    /// `created_by`
    CreatedBy,
    /// `assigned_to`
    AssignedTo,
    /// `status_text`
    StatusText,
    /// `open`
    Open,
    /// `created_on`
    CreatedOn,
    /// `updated_on`
    UpdatedOn,
}

impl IssueField {
    /// Fields an update request may change, in request order.
    pub const MUTABLE: [IssueField; 6] = [
        IssueField::IssueTitle,
        IssueField::IssueText,
        IssueField::CreatedBy,
        IssueField::AssignedTo,
        IssueField::Open,
        IssueField::StatusText,
    ];

    /// Fields that must be present and non-empty on creation.
    pub const REQUIRED: [IssueField; 3] = [
        IssueField::IssueTitle,
        IssueField::IssueText,
        IssueField::CreatedBy,
    ];

    /// Wire name of the field
    pub const fn name(&self) -> &'static str {
        match self {
            IssueField::Id => "_id",
            IssueField::Project => "project",
            IssueField::IssueTitle => "issue_title",
            IssueField::IssueText => "issue_text",
            IssueField::CreatedBy => "created_by",
            IssueField::AssignedTo => "assigned_to",
            IssueField::StatusText => "status_text",
            IssueField::Open => "open",
            IssueField::CreatedOn => "created_on",
            IssueField::UpdatedOn => "updated_on",
        }
    }

    /// Look up a field by wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "_id" => IssueField::Id,
            "project" => IssueField::Project,
            "issue_title" => IssueField::IssueTitle,
            "issue_text" => IssueField::IssueText,
            "created_by" => IssueField::CreatedBy,
            "assigned_to" => IssueField::AssignedTo,
            "status_text" => IssueField::StatusText,
            "open" => IssueField::Open,
            "created_on" => IssueField::CreatedOn,
            "updated_on" => IssueField::UpdatedOn,
            _ => return None,
        })
    }
}

impl std::fmt::Display for IssueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Loose truthiness of a request value.
///
/// `null`, `false`, `0`, and `""` are falsy; everything else is truthy.
/// Note a form-encoded `open=false` arrives as the non-empty string `"false"`
/// and is therefore truthy, while a JSON `false` is not.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// `true` for the empty string only.
pub fn is_empty_string(value: &JsonValue) -> bool {
    matches!(value, JsonValue::String(s) if s.is_empty())
}

/// Cast a request value to a string field.
pub fn cast_string(field: IssueField, value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Null => Err(Error::cast(field.name(), "null is not a string")),
        JsonValue::Array(_) => Err(Error::cast(field.name(), "array is not a string")),
        JsonValue::Object(_) => Err(Error::cast(field.name(), "object is not a string")),
    }
}

/// Cast a request value to a boolean field.
pub fn cast_bool(field: IssueField, value: &JsonValue) -> Result<bool> {
    match value {
        JsonValue::Bool(b) => Ok(*b),
        JsonValue::String(s) => match s.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(Error::cast(
                field.name(),
                format!("{:?} is not a boolean", other),
            )),
        },
        JsonValue::Number(n) => match n.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(Error::cast(field.name(), format!("{} is not a boolean", n))),
        },
        other => Err(Error::cast(
            field.name(),
            format!("{} is not a boolean", other),
        )),
    }
}
