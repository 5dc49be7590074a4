//! In-memory document store
//!
//! # Design
//!
//! - DashMap keyed by `IssueId`: sharded, lock-free reads
//! - Writes lock only the shard holding the target issue, so concurrent
//!   updates to one issue are serialized and updates to different issues
//!   rarely contend
//! - `find` is a full scan; results are ordered by creation time, then id
//! - Creation stamps are strictly increasing across the store, so creation
//!   order and `created_at` order agree

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;
use tracker_core::{Issue, IssueId, NewIssue, Timestamp};

use crate::error::StoreResult;
use crate::filter::Filter;
use crate::patch::IssuePatch;
use crate::store::DocumentStore;

/// Sharded in-memory issue collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    issues: DashMap<IssueId, Issue>,
    /// Last creation stamp handed out, in microseconds
    last_created: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall-clock time, bumped past the previous creation stamp if needed.
    fn creation_stamp(&self) -> Timestamp {
        let mut stamp = Timestamp::now();
        // fetch_update only errs when the closure returns None
        let _ = self
            .last_created
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
                stamp = Timestamp::now_after(Timestamp::from_micros(prev));
                Some(stamp.as_micros())
            });
        stamp
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, filter: &Filter) -> StoreResult<Vec<Issue>> {
        let mut found: Vec<Issue> = match filter.id() {
            Some(id) => self
                .issues
                .get(&id)
                .filter(|entry| filter.matches(entry.value()))
                .map(|entry| entry.value().clone())
                .into_iter()
                .collect(),
            None => self
                .issues
                .iter()
                .filter(|entry| filter.matches(entry.value()))
                .map(|entry| entry.value().clone())
                .collect(),
        };
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    fn create(&self, doc: NewIssue) -> StoreResult<Issue> {
        let now = self.creation_stamp();
        loop {
            let id = IssueId::new();
            // v4 collisions are practically impossible; retry rather than overwrite
            if let Entry::Vacant(slot) = self.issues.entry(id) {
                let issue = Issue::create(id, doc, now);
                slot.insert(issue.clone());
                debug!(id = %id, project = %issue.project, "issue stored");
                return Ok(issue);
            }
        }
    }

    fn find_by_id_and_update(&self, id: IssueId, patch: &IssuePatch) -> StoreResult<Option<Issue>> {
        let Some(mut entry) = self.issues.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(entry.value_mut());
        debug!(id = %id, fields = ?patch.field_names(), version = entry.version, "issue patched");
        Ok(Some(entry.value().clone()))
    }

    fn find_one_and_delete(&self, filter: &Filter) -> StoreResult<Option<Issue>> {
        let target = match filter.id() {
            Some(id) => Some(id),
            None => self
                .find(filter)?
                .into_iter()
                .next()
                .map(|issue| issue.id),
        };
        let Some(id) = target else {
            return Ok(None);
        };
        // re-check under the shard lock in case the issue changed since the scan
        let removed = self
            .issues
            .remove_if(&id, |_, issue| filter.matches(issue))
            .map(|(_, issue)| issue);
        if removed.is_some() {
            debug!(id = %id, "issue removed");
        }
        Ok(removed)
    }

    fn count(&self) -> usize {
        self.issues.len()
    }
}
