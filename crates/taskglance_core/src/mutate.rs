//! Pure task mutation semantics.
//!
//! # Responsibility
//! - Turn a draft payload into a fresh task with defaults applied.
//! - Merge a partial patch onto an existing task.
//! - Toggle completion without touching anything else.
//!
//! # Invariants
//! - Inputs are never mutated; every function returns a new `Task`.
//! - No create/update is accepted with an empty title, or with the
//!   reminder flag on and no usable email.
//! - A merged task whose reminder flag is off carries no reminder payload,
//!   regardless of what the patch supplied.

use crate::model::category::CategoryId;
use crate::model::task::{Priority, Task, TaskValidationError};
use uuid::Uuid;

/// Configured fallbacks applied when a draft leaves fields unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefaults {
    /// Category assigned to drafts that name none.
    pub category_id: CategoryId,
}

impl TaskDefaults {
    pub fn new(category_id: impl Into<CategoryId>) -> Self {
        Self {
            category_id: category_id.into(),
        }
    }
}

/// Payload for creating a task. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<i64>,
    pub priority: Option<Priority>,
    pub category_id: Option<CategoryId>,
    pub reminder: bool,
    pub reminder_email: Option<String>,
    pub reminder_time: Option<i64>,
}

impl TaskDraft {
    /// Convenience constructor for the common title-only draft.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update payload. `None` preserves the existing value; the
/// double-`Option` fields distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<i64>>,
    pub priority: Option<Priority>,
    pub category_id: Option<CategoryId>,
    pub completed: Option<bool>,
    pub reminder: Option<bool>,
    pub reminder_email: Option<Option<String>>,
    pub reminder_time: Option<Option<i64>>,
}

/// Builds a new task from a draft.
///
/// # Contract
/// - `title` is trimmed, then required to be non-empty.
/// - Defaults: not completed, `Priority::Medium`, no due date,
///   `defaults.category_id` when the draft names no category,
///   `created_at = now_ms`, reminder off.
/// - With `reminder = true` the draft must carry a usable email.
pub fn create_task(
    draft: TaskDraft,
    defaults: &TaskDefaults,
    now_ms: i64,
) -> Result<Task, TaskValidationError> {
    let task = Task {
        id: Uuid::new_v4(),
        title: draft.title.trim().to_string(),
        description: draft.description,
        completed: false,
        due_date: draft.due_date,
        priority: draft.priority.unwrap_or_default(),
        category_id: draft
            .category_id
            .unwrap_or_else(|| defaults.category_id.clone()),
        created_at: now_ms,
        reminder: draft.reminder,
        reminder_email: draft.reminder_email,
        reminder_time: draft.reminder_time,
    };
    finalize(task)
}

/// Merges a patch onto an existing task and returns the merged copy.
///
/// Fields absent from the patch keep their prior value. When the merged
/// reminder flag is false the reminder payload is dropped even if the
/// patch supplied one.
pub fn update_task(existing: &Task, patch: &TaskPatch) -> Result<Task, TaskValidationError> {
    let mut merged = existing.clone();
    if let Some(title) = &patch.title {
        merged.title = title.trim().to_string();
    }
    if let Some(description) = &patch.description {
        merged.description = description.clone();
    }
    if let Some(due_date) = patch.due_date {
        merged.due_date = due_date;
    }
    if let Some(priority) = patch.priority {
        merged.priority = priority;
    }
    if let Some(category_id) = &patch.category_id {
        merged.category_id = category_id.clone();
    }
    if let Some(completed) = patch.completed {
        merged.completed = completed;
    }
    if let Some(reminder) = patch.reminder {
        merged.reminder = reminder;
    }
    if let Some(reminder_email) = &patch.reminder_email {
        merged.reminder_email = reminder_email.clone();
    }
    if let Some(reminder_time) = patch.reminder_time {
        merged.reminder_time = reminder_time;
    }
    finalize(merged)
}

/// Returns a copy of `existing` with only the completion flag replaced.
pub fn set_completed(existing: &Task, completed: bool) -> Task {
    Task {
        completed,
        ..existing.clone()
    }
}

fn finalize(mut task: Task) -> Result<Task, TaskValidationError> {
    task.normalize_reminder();
    task.validate()?;
    Ok(task)
}
