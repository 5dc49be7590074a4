//! Issue Tracker - project-scoped issue records over REST/JSON
//!
//! Callers create, list/filter, partially update and delete issues scoped to
//! a named project.
//!
//! # Quick Start
//!
//! ```
//! use issue_tracker::Tracker;
//! use serde_json::json;
//!
//! let tracker = Tracker::ephemeral();
//! let body = json!({"issue_title": "Crash", "issue_text": "on start", "created_by": "ann"});
//! let issue = tracker.create_issue("apitest", body.as_object().unwrap().clone())?;
//! assert!(issue.open);
//! # Ok::<(), issue_tracker::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Tracker`] struct provides a typed high-level interface.
//!
//! The store layer is exposed only through [`DocumentStore`] and
//! [`MemoryStore`], so callers can plug in their own persistence.

// Re-export the public API from tracker-executor
pub use tracker_executor::*;

pub use tracker_core::{IssueId, Timestamp};
pub use tracker_storage::{DocumentStore, MemoryStore};
