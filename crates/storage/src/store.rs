//! Document store abstraction
//!
//! The issue handlers talk to persistence only through [`DocumentStore`], a
//! collection-style API of single-document operations. Each call is atomic on
//! the one document it touches; there are no multi-document transactions.

use tracker_core::{Issue, IssueId, NewIssue};

use crate::error::StoreResult;
use crate::filter::Filter;
use crate::patch::IssuePatch;

/// Collection API over stored issues.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). Concurrent writes to the same
/// identifier are serialized by the implementation.
pub trait DocumentStore: Send + Sync {
    /// Every issue matching `filter`.
    ///
    /// Zero matches is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Lookup` if the query cannot be resolved.
    fn find(&self, filter: &Filter) -> StoreResult<Vec<Issue>>;

    /// Persist a new issue, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is rejected.
    fn create(&self, doc: NewIssue) -> StoreResult<Issue>;

    /// Apply `patch` to the issue with this identifier and return the updated
    /// record, or `None` if no such issue exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the patched document is rejected.
    fn find_by_id_and_update(&self, id: IssueId, patch: &IssuePatch) -> StoreResult<Option<Issue>>;

    /// Remove the first issue matching `filter` and return it, or `None` if
    /// nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    fn find_one_and_delete(&self, filter: &Filter) -> StoreResult<Option<Issue>>;

    /// Number of stored issues across all projects
    fn count(&self) -> usize;
}
