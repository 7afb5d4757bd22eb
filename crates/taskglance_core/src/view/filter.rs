//! List filtering and count badges.
//!
//! # Responsibility
//! - Narrow a projected list to the active category/visibility selection.
//! - Derive the per-category and overall counts shown next to the list.
//!
//! # Invariants
//! - Filter and counts share one predicate, so for every selection
//!   `count_* == filter_tasks(..).len()` for the matching arguments.
//! - Input order is preserved; filtering is idempotent.

use crate::model::category::CategoryId;
use crate::model::task::Task;
use crate::view::projector::TaskWithCategory;

/// The active list selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// `None` selects all categories.
    pub selected_category: Option<CategoryId>,
    /// Completed tasks are hidden unless set.
    pub show_completed: bool,
}

impl TaskFilter {
    pub fn new(selected_category: Option<CategoryId>, show_completed: bool) -> Self {
        Self {
            selected_category,
            show_completed,
        }
    }
}

/// Returns the subsequence of `items` matching the filter.
pub fn filter_tasks(items: &[TaskWithCategory], filter: &TaskFilter) -> Vec<TaskWithCategory> {
    items
        .iter()
        .filter(|item| {
            matches(
                &item.task,
                filter.selected_category.as_deref(),
                filter.show_completed,
            )
        })
        .cloned()
        .collect()
}

/// Count of tasks in `category_id` under the given visibility rule.
pub fn count_for_category(
    items: &[TaskWithCategory],
    category_id: &str,
    show_completed: bool,
) -> usize {
    items
        .iter()
        .filter(|item| matches(&item.task, Some(category_id), show_completed))
        .count()
}

/// Count of tasks under the visibility rule alone, ignoring category.
pub fn count_all(items: &[TaskWithCategory], show_completed: bool) -> usize {
    items
        .iter()
        .filter(|item| matches(&item.task, None, show_completed))
        .count()
}

fn matches(task: &Task, selected_category: Option<&str>, show_completed: bool) -> bool {
    if !show_completed && task.completed {
        return false;
    }
    if let Some(selected) = selected_category {
        if task.category_id != selected {
            return false;
        }
    }
    true
}
