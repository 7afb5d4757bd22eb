//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by list and calendar views.
//! - Enforce the write-path invariants (title, reminder payload, id).
//!
//! # Invariants
//! - `id` is stable, unique within a `TaskStore`, and never reused.
//! - `title` is non-empty (checked before any create/update is accepted).
//! - `reminder_email`/`reminder_time` carry meaning only while
//!   `reminder == true`; with the flag off both are held as `None`.

use crate::model::category::CategoryId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

static REMINDER_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid reminder email regex"));

/// Task urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Canonical task record.
///
/// Timestamps are Unix epoch milliseconds. Serialized field names follow
/// the external camelCase schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for lookups and mutation targeting.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Due day in epoch milliseconds; `None` keeps the task off the calendar.
    pub due_date: Option<i64>,
    pub priority: Priority,
    /// Foreign key into the category store. Must resolve at projection time.
    pub category_id: CategoryId,
    /// Creation instant in epoch milliseconds.
    pub created_at: i64,
    /// Email reminder intent flag.
    pub reminder: bool,
    /// Meaningful only while `reminder == true`.
    pub reminder_email: Option<String>,
    /// Meaningful only while `reminder == true`.
    pub reminder_time: Option<i64>,
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyTitle,
    /// Reminder flag is on but no email address is present.
    MissingReminderEmail,
    /// Reminder flag is on but the address is not a plausible email.
    InvalidReminderEmail(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::MissingReminderEmail => {
                write!(f, "reminder is enabled but no reminder email is set")
            }
            Self::InvalidReminderEmail(value) => {
                write!(f, "reminder email is not a valid address: `{value}`")
            }
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates a task with a freshly generated id and default field values.
    ///
    /// Defaults: not completed, medium priority, no due date, reminder off.
    pub fn new(
        title: impl Into<String>,
        category_id: impl Into<CategoryId>,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            completed: false,
            due_date: None,
            priority: Priority::Medium,
            category_id: category_id.into(),
            created_at,
            reminder: false,
            reminder_email: None,
            reminder_time: None,
        }
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by fixtures and import paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        category_id: impl Into<CategoryId>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let mut task = Self::new(title, category_id, created_at);
        task.id = id;
        Ok(task)
    }

    /// Checks the record against task invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.reminder {
            match self.reminder_email.as_deref().map(str::trim) {
                None | Some("") => return Err(TaskValidationError::MissingReminderEmail),
                Some(email) if !REMINDER_EMAIL_RE.is_match(email) => {
                    return Err(TaskValidationError::InvalidReminderEmail(email.to_string()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Drops any reminder payload left over while the flag is off.
    ///
    /// Stored rows may carry stale email/time values from before the flag
    /// was cleared; they are treated as absent everywhere.
    pub fn normalize_reminder(&mut self) {
        if !self.reminder {
            self.reminder_email = None;
            self.reminder_time = None;
        }
    }
}
