//! In-memory store snapshots.
//!
//! # Responsibility
//! - Hold the current task/category collections as immutable snapshots.
//! - Provide copy-on-write transitions that return the next snapshot.
//!
//! # Invariants
//! - Ids are unique within a store; duplicates are rejected on entry.
//! - Iteration order is insertion order, and every transition preserves it.
//! - Transitions never mutate the snapshot they start from; the caller
//!   installs the returned store as the new current state.

use crate::model::category::CategoryId;
use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod category_store;
mod task_store;

pub use category_store::CategoryStore;
pub use task_store::TaskStore;

/// Snapshot construction/transition failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateCategory(CategoryId),
    DuplicateTask(TaskId),
    TaskNotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCategory(id) => write!(f, "duplicate category id: {id}"),
            Self::DuplicateTask(id) => write!(f, "duplicate task id: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {}
