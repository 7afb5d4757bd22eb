//! Built-in sample board.
//!
//! # Responsibility
//! - Provide the demo categories/tasks a fresh install starts with.
//!
//! # Invariants
//! - Ids are fixed so repeated seeding and tests are deterministic.
//! - Due dates pin to UTC midnight of their calendar day.

use crate::model::category::Category;
use crate::model::task::{Priority, Task, TaskId};
use crate::repo::{CategoryRepository, RepoResult, TaskRepository};
use crate::store::{CategoryStore, TaskStore};
use chrono::NaiveDate;
use uuid::Uuid;

/// The four demo categories.
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("work", "Work", "#9b87f5"),
        Category::new("personal", "Personal", "#F97316"),
        Category::new("shopping", "Shopping", "#0EA5E9"),
        Category::new("health", "Health", "#22C55E"),
    ]
}

/// The eight demo tasks, due across April 2025.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        sample_task(
            1,
            "Complete project proposal",
            "Draft and submit the Q2 project proposal to the management team.",
            false,
            20,
            Priority::High,
            "work",
            15,
        ),
        sample_task(
            2,
            "Buy groceries",
            "Pick up fruits, vegetables, and snacks for the week.",
            true,
            17,
            Priority::Medium,
            "shopping",
            16,
        ),
        sample_task(
            3,
            "Schedule dentist appointment",
            "Call Dr. Smith's office for annual checkup.",
            false,
            25,
            Priority::Low,
            "health",
            14,
        ),
        sample_task(
            4,
            "Prepare for presentation",
            "Create slides and practice for the quarterly review.",
            false,
            19,
            Priority::High,
            "work",
            15,
        ),
        sample_task(
            5,
            "Call mom",
            "Check in and catch up with mom.",
            false,
            18,
            Priority::Medium,
            "personal",
            17,
        ),
        sample_task(
            6,
            "Go for a run",
            "30-minute jog in the park.",
            false,
            17,
            Priority::Low,
            "health",
            16,
        ),
        sample_task(
            7,
            "Review expense reports",
            "Go through the team's expense reports and approve or reject them.",
            false,
            22,
            Priority::Medium,
            "work",
            15,
        ),
        sample_task(
            8,
            "Order new headphones",
            "Research and purchase noise-cancelling headphones.",
            false,
            24,
            Priority::Low,
            "shopping",
            18,
        ),
    ]
}

/// The demo data as ready-made store snapshots.
pub fn sample_board() -> (CategoryStore, TaskStore) {
    let categories = CategoryStore::from_categories(sample_categories())
        .expect("sample categories have unique ids");
    let tasks = TaskStore::from_tasks(sample_tasks()).expect("sample tasks have unique ids");
    (categories, tasks)
}

/// Persists the demo data through the repositories (upsert, so repeated
/// seeding converges on the same rows).
pub fn seed_sample_board(
    categories: &impl CategoryRepository,
    tasks: &impl TaskRepository,
) -> RepoResult<()> {
    for category in sample_categories() {
        categories.save_category(&category)?;
    }
    for task in sample_tasks() {
        tasks.save_task(&task)?;
    }
    Ok(())
}

/// The fixed id of demo task `index` (1-based).
pub fn sample_task_id(index: u8) -> TaskId {
    Uuid::parse_str(&format!("00000000-0000-4000-8000-{index:012x}"))
        .expect("valid fixed sample uuid")
}

/// UTC midnight of a calendar day, in epoch milliseconds.
pub fn utc_day_ms(year: i32, month: u32, day: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid seed date")
        .and_hms_opt(0, 0, 0)
        .expect("valid seed time")
        .and_utc()
        .timestamp_millis()
}

#[allow(clippy::too_many_arguments)]
fn sample_task(
    index: u8,
    title: &str,
    description: &str,
    completed: bool,
    due_day: u32,
    priority: Priority,
    category_id: &str,
    created_day: u32,
) -> Task {
    let mut task = Task::with_id(
        sample_task_id(index),
        title,
        category_id,
        utc_day_ms(2025, 4, created_day),
    )
    .expect("sample task id is non-nil");
    task.description = description.to_string();
    task.completed = completed;
    task.due_date = Some(utc_day_ms(2025, 4, due_day));
    task.priority = priority;
    task
}
