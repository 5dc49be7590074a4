//! Core types for the issue tracker
//!
//! This module defines the foundational types:
//! - IssueId: Store-assigned unique identifier for an issue
//! - NewIssue: The document handed to the store on creation
//! - Issue: A stored issue record, including store metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::contract::Timestamp;
use crate::error::Error;

/// Unique identifier for an issue
///
/// A wrapper around a UUID v4. Rendered as 32 lowercase hex characters
/// without hyphens; parsing accepts both the simple and hyphenated forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueId(Uuid);

impl IssueId {
    /// Create a new random IssueId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an IssueId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse an IssueId from its string representation
    ///
    /// # Errors
    /// Returns `Error::InvalidId` if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|_| Error::InvalidId {
            value: s.to_string(),
        })
    }

    /// Get the raw bytes of this IssueId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for IssueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for IssueId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueId::parse(s)
    }
}

impl Serialize for IssueId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IssueId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        IssueId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Document handed to the store by the create operation.
///
/// The store assigns the identifier and both timestamps; `open` always
/// starts as `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    /// Owning project, taken from the request path
    pub project: String,
    /// Short title
    pub issue_title: String,
    /// Body text
    pub issue_text: String,
    /// Author
    pub created_by: String,
    /// Assignee; empty when unassigned
    #[serde(default)]
    pub assigned_to: String,
    /// Free-form status line; empty by default
    #[serde(default)]
    pub status_text: String,
}

/// A stored issue.
///
/// `created_at` / `updated_at` and `version` are the store's own names and
/// metadata; the public response shape renames the timestamps to
/// `created_on` / `updated_on` and drops `project` and `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Store-assigned identifier, never reassigned
    pub id: IssueId,
    /// Owning project, immutable after creation
    pub project: String,
    /// Short title
    pub issue_title: String,
    /// Body text
    pub issue_text: String,
    /// Author
    pub created_by: String,
    /// Assignee
    pub assigned_to: String,
    /// Free-form status line
    pub status_text: String,
    /// `false` once the issue is closed
    pub open: bool,
    /// Creation time, never mutated
    pub created_at: Timestamp,
    /// Last successful write
    pub updated_at: Timestamp,
    /// Write counter, starts at 1 and increments on every update
    pub version: u64,
}

impl Issue {
    /// Materialize a new issue from its creation document.
    pub fn create(id: IssueId, doc: NewIssue, now: Timestamp) -> Self {
        Issue {
            id,
            project: doc.project,
            issue_title: doc.issue_title,
            issue_text: doc.issue_text,
            created_by: doc.created_by,
            assigned_to: doc.assigned_to,
            status_text: doc.status_text,
            open: true,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }
}
