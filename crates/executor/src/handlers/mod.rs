//! Command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `issue` | ListIssues, CreateIssue, UpdateIssue, DeleteIssue |

pub mod issue;
