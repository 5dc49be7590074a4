//! Equality filters over issues
//!
//! A [`Filter`] is a conjunction of [`Condition`]s. Each condition compares
//! one field for exact equality against a value already cast to that field's
//! stored type. Conditions on names that are not issue fields are kept
//! verbatim; since stored issues carry no extra fields, they match nothing.

use serde_json::Value as JsonValue;
use tracker_core::{cast_bool, Issue, IssueField, IssueId, Timestamp};

use crate::error::{StoreError, StoreResult};

/// Typed right-hand side of an equality condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Identifier comparison
    Id(IssueId),
    /// String field comparison
    Text(String),
    /// Boolean field comparison
    Bool(bool),
    /// Timestamp field comparison
    Time(Timestamp),
}

/// A single `field == value` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Condition on a known issue field
    Field {
        /// Field compared
        field: IssueField,
        /// Value compared against
        value: FilterValue,
    },
    /// Condition on a name outside the issue schema, passed through as-is
    Extra {
        /// Parameter name
        name: String,
        /// Raw parameter value
        value: String,
    },
}

impl Condition {
    /// Build a condition from a raw query parameter.
    ///
    /// The raw string is cast to the stored type of the named field. A value
    /// that cannot be cast yields `StoreError::Lookup`.
    pub fn parse(name: &str, raw: &str) -> StoreResult<Self> {
        let Some(field) = IssueField::from_name(name) else {
            return Ok(Condition::Extra {
                name: name.to_string(),
                value: raw.to_string(),
            });
        };
        let value = match field {
            IssueField::Id => FilterValue::Id(
                IssueId::parse(raw).map_err(|e| StoreError::lookup(e.to_string()))?,
            ),
            IssueField::Open => FilterValue::Bool(
                cast_bool(field, &JsonValue::String(raw.to_string()))
                    .map_err(|e| StoreError::lookup(e.to_string()))?,
            ),
            IssueField::CreatedOn | IssueField::UpdatedOn => FilterValue::Time(
                Timestamp::parse_rfc3339(raw).map_err(|e| StoreError::lookup(e.to_string()))?,
            ),
            _ => FilterValue::Text(raw.to_string()),
        };
        Ok(Condition::Field { field, value })
    }

    /// Name the condition applies to
    pub fn name(&self) -> &str {
        match self {
            Condition::Field { field, .. } => field.name(),
            Condition::Extra { name, .. } => name,
        }
    }

    /// Evaluate against a stored issue
    pub fn matches(&self, issue: &Issue) -> bool {
        let (field, value) = match self {
            Condition::Field { field, value } => (field, value),
            Condition::Extra { .. } => return false,
        };
        match (field, value) {
            (IssueField::Id, FilterValue::Id(id)) => issue.id == *id,
            (IssueField::Project, FilterValue::Text(s)) => issue.project == *s,
            (IssueField::IssueTitle, FilterValue::Text(s)) => issue.issue_title == *s,
            (IssueField::IssueText, FilterValue::Text(s)) => issue.issue_text == *s,
            (IssueField::CreatedBy, FilterValue::Text(s)) => issue.created_by == *s,
            (IssueField::AssignedTo, FilterValue::Text(s)) => issue.assigned_to == *s,
            (IssueField::StatusText, FilterValue::Text(s)) => issue.status_text == *s,
            (IssueField::Open, FilterValue::Bool(b)) => issue.open == *b,
            (IssueField::CreatedOn, FilterValue::Time(t)) => issue.created_at == *t,
            (IssueField::UpdatedOn, FilterValue::Time(t)) => issue.updated_at == *t,
            // type mismatch: a condition built outside `parse` can never match
            _ => false,
        }
    }
}

/// Conjunction of equality conditions. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Filter matching every issue
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching every issue of one project
    pub fn for_project(project: impl Into<String>) -> Self {
        Self::new().with(Condition::Field {
            field: IssueField::Project,
            value: FilterValue::Text(project.into()),
        })
    }

    /// Filter matching a single identifier
    pub fn by_id(id: IssueId) -> Self {
        Self::new().with(Condition::Field {
            field: IssueField::Id,
            value: FilterValue::Id(id),
        })
    }

    /// Add a condition.
    ///
    /// A later condition on the same name replaces the earlier one.
    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.retain(|c| c.name() != condition.name());
        self.conditions.push(condition);
        self
    }

    /// Conditions in insertion order
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The identifier this filter pins down, if it has an `_id` condition
    pub fn id(&self) -> Option<IssueId> {
        self.conditions.iter().find_map(|c| match c {
            Condition::Field {
                value: FilterValue::Id(id),
                ..
            } => Some(*id),
            _ => None,
        })
    }

    /// `true` when every condition holds
    pub fn matches(&self, issue: &Issue) -> bool {
        self.conditions.iter().all(|c| c.matches(issue))
    }
}
