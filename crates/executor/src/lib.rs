//! # Tracker Executor
//!
//! Issue operations for the tracker, independent of any transport.
//!
//! This crate provides:
//! - [`Tracker`] - typed methods for the four issue operations
//! - [`Command`]/[`Output`] - low-level command interface (for transports)
//! - [`Error`] - every declared failure, with its JSON body
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tracker_executor::{Command, Executor, Output};
//!
//! let executor = Executor::ephemeral();
//! let body = json!({"issue_title": "Crash", "issue_text": "on start", "created_by": "ann"});
//! let out = executor.execute(Command::CreateIssue {
//!     project: "apitest".into(),
//!     fields: body.as_object().unwrap().clone(),
//! }).unwrap();
//! assert!(matches!(out, Output::Created(_)));
//! ```
//!
//! ## Operations
//!
//! | Operation | Command | Success body |
//! |-----------|---------|--------------|
//! | list | `ListIssues` | array of issues |
//! | create | `CreateIssue` | the new issue |
//! | update | `UpdateIssue` | `{result: "successfully updated", _id}` |
//! | delete | `DeleteIssue` | `{result: "successfully deleted", _id}` |

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
pub(crate) mod handlers;
mod output;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use tracker::Tracker;
pub use types::{Fields, IssueView};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
