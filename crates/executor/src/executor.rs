//! The Executor - single entry point to the issue store.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! issue handlers and returns their outputs.

use std::sync::Arc;

use tracing::debug_span;
use tracker_storage::{DocumentStore, MemoryStore};

use crate::handlers::issue;
use crate::{Command, Output, Result};

/// The command executor - single entry point to the issue store.
///
/// The Executor is **stateless**: it holds a reference to the document store
/// but maintains no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and cheap to clone; clones share one store.
///
/// # Example
///
/// ```
/// use tracker_executor::{Command, Executor, Output};
///
/// let executor = Executor::ephemeral();
/// let out = executor
///     .execute(Command::ListIssues { project: "apitest".into(), query: vec![] })
///     .unwrap();
/// assert_eq!(out, Output::Issues(vec![]));
/// ```
#[derive(Clone)]
pub struct Executor {
    store: Arc<dyn DocumentStore>,
}

impl Executor {
    /// Create a new executor over a document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create an executor over a fresh in-memory store.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Execute a single command.
    ///
    /// Returns the command result or one of the declared errors.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let span = debug_span!("command", op = cmd.name(), project = %cmd.project());
        let _guard = span.enter();

        match cmd {
            Command::ListIssues { project, query } => {
                issue::list_issues(&self.store, project, query)
            }
            Command::CreateIssue { project, fields } => {
                issue::create_issue(&self.store, project, fields)
            }
            Command::UpdateIssue { project, fields } => {
                issue::update_issue(&self.store, project, fields)
            }
            Command::DeleteIssue { project, fields } => {
                issue::delete_issue(&self.store, project, fields)
            }
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("issues", &self.store.count())
            .finish()
    }
}
