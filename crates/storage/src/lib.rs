//! Storage layer for the issue tracker
//!
//! This crate implements the document store the issue handlers run against:
//! - DocumentStore: collection API (`find`, `create`, `find_by_id_and_update`,
//!   `find_one_and_delete`)
//! - Filter / Condition: typed equality filters built from query parameters
//! - IssuePatch: typed merge patch over the mutable fields
//! - MemoryStore: DashMap-backed sharded implementation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod filter;
pub mod memory;
pub mod patch;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use filter::{Condition, Filter, FilterValue};
pub use memory::MemoryStore;
pub use patch::IssuePatch;
pub use store::DocumentStore;
