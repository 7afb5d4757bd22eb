//! Core domain logic for Task Glance.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod mutate;
pub mod notify;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, CategoryValidationError};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use mutate::{TaskDefaults, TaskDraft, TaskPatch};
pub use notify::{LogOnlyReminderScheduler, ReminderScheduler};
pub use repo::{
    CategoryRepository, RepoError, RepoResult, SqliteCategoryRepository, SqliteTaskRepository,
    TaskRepository,
};
pub use service::board_service::{BoardService, BoardServiceError};
pub use session::Session;
pub use store::{CategoryStore, StoreError, TaskStore};
pub use view::calendar::{
    month_grid, CalendarError, DayCell, MonthRef, DEFAULT_DAY_TASK_CAP,
};
pub use view::filter::{count_all, count_for_category, filter_tasks, TaskFilter};
pub use view::projector::{project, ProjectionError, TaskWithCategory};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
