//! Reminder scheduling boundary.
//!
//! # Responsibility
//! - Define the seam through which the core hands off reminder intents.
//!
//! # Invariants
//! - The core never delivers email itself; a scheduler implementation
//!   owns the trigger and delivery mechanism.

use crate::model::task::TaskId;
use log::info;

/// External collaborator that turns a reminder intent into a delivery.
pub trait ReminderScheduler {
    /// Registers an email reminder for `task_id`.
    ///
    /// `time` is the requested trigger instant in epoch milliseconds; a
    /// scheduler may fall back to its own policy when it is `None`.
    fn schedule_reminder(&self, task_id: TaskId, email: &str, time: Option<i64>);
}

/// Scheduler stub that records the intent in the log and delivers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyReminderScheduler;

impl ReminderScheduler for LogOnlyReminderScheduler {
    fn schedule_reminder(&self, task_id: TaskId, email: &str, time: Option<i64>) {
        info!(
            "event=reminder_scheduled module=notify status=ok task_id={task_id} email={email} time_ms={}",
            time.map_or_else(|| "none".to_string(), |value| value.to_string())
        );
    }
}
