//! Core types for the issue tracker
//!
//! This crate defines the foundational types used throughout the system:
//! - IssueId: Store-assigned unique identifier
//! - Issue / NewIssue: The stored record and its creation document
//! - Timestamp: Microsecond timestamps rendered as RFC 3339
//! - IssueField: Wire names of every field, plus loose value casting
//! - Error: Identifier and cast failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod field;
pub mod types;

pub use contract::Timestamp;
pub use error::{Error, Result};
pub use field::{cast_bool, cast_string, is_empty_string, is_truthy, IssueField};
pub use types::{Issue, IssueId, NewIssue};
