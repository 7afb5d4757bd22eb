//! Task/category join projection.
//!
//! # Responsibility
//! - Produce one `TaskWithCategory` per task, in store order.
//!
//! # Invariants
//! - The projection is recomputed on every read and never persisted.
//! - A task whose `category_id` does not resolve fails the whole
//!   projection; no partial result is returned.

use crate::model::category::{Category, CategoryId};
use crate::model::task::{Task, TaskId};
use crate::store::{CategoryStore, TaskStore};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Read-only join of a task with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskWithCategory {
    #[serde(flatten)]
    pub task: Task,
    pub category: Category,
}

/// Projection integrity failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A task references a category id that is not in the store.
    CategoryNotFound {
        task_id: TaskId,
        category_id: CategoryId,
    },
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryNotFound {
                task_id,
                category_id,
            } => write!(
                f,
                "task {task_id} references unknown category `{category_id}`"
            ),
        }
    }
}

impl Error for ProjectionError {}

/// Joins every task with its category, preserving store order.
///
/// Fails atomically on the first dangling `category_id`: an integrity
/// break is surfaced instead of silently shrinking the view.
pub fn project(
    tasks: &TaskStore,
    categories: &CategoryStore,
) -> Result<Vec<TaskWithCategory>, ProjectionError> {
    tasks
        .iter()
        .map(|task| {
            let category = categories.get(&task.category_id).ok_or_else(|| {
                ProjectionError::CategoryNotFound {
                    task_id: task.id,
                    category_id: task.category_id.clone(),
                }
            })?;
            Ok(TaskWithCategory {
                task: task.clone(),
                category: category.clone(),
            })
        })
        .collect()
}
