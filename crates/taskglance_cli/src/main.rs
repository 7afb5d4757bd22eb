//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that exercises the core end to end:
//!   open an in-memory store, seed the sample board, project and filter.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;

use taskglance_core::db::open_db_in_memory;
use taskglance_core::seed::{sample_board, seed_sample_board};
use taskglance_core::view::calendar::{month_grid, MonthRef, DEFAULT_DAY_TASK_CAP};
use taskglance_core::view::filter::{count_all, count_for_category, filter_tasks, TaskFilter};
use taskglance_core::view::projector::project;
use taskglance_core::{
    BoardService, LogOnlyReminderScheduler, SqliteCategoryRepository, SqliteTaskRepository,
    TaskDefaults,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("taskglance_core version={}", taskglance_core::core_version());

    // Persistence round trip: seed through the repositories, load back.
    let conn = open_db_in_memory()?;
    let category_repo = SqliteCategoryRepository::try_new(&conn)?;
    let task_repo = SqliteTaskRepository::try_new(&conn)?;
    seed_sample_board(&category_repo, &task_repo)?;

    let service = BoardService::new(
        category_repo,
        task_repo,
        LogOnlyReminderScheduler,
        TaskDefaults::new("work"),
    );
    let (categories, tasks) = service.load_board()?;
    println!("loaded categories={} tasks={}", categories.len(), tasks.len());

    // Derived views over the same data as pure snapshots.
    let (categories, tasks) = sample_board();
    let projected = project(&tasks, &categories)?;

    let filter = TaskFilter::default();
    let visible = filter_tasks(&projected, &filter);
    println!(
        "open tasks={} of {}",
        visible.len(),
        count_all(&projected, true)
    );
    for category in categories.iter() {
        println!(
            "  {:<10} open={}",
            category.id,
            count_for_category(&projected, &category.id, false)
        );
    }

    let april = MonthRef::new(2025, 4)?;
    let grid = month_grid(april, &projected);
    let due_days = grid
        .iter()
        .filter(|cell| cell.in_month && !cell.tasks.is_empty())
        .count();
    println!(
        "calendar {}-{:02}: cells={} days_with_tasks={} cap={}",
        april.year(),
        april.month(),
        grid.len(),
        due_days,
        DEFAULT_DAY_TASK_CAP
    );

    Ok(())
}
