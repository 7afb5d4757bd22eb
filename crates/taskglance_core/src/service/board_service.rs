//! Task board use-case service.
//!
//! # Responsibility
//! - Provide create/update/toggle entry points that validate, persist,
//!   and hand reminder intents to the scheduler.
//! - Rebuild store snapshots from persistence at start (`load_board`).
//!
//! # Invariants
//! - Validation failures leave stored state untouched (all-or-nothing).
//! - A task is only written against a category that exists.
//! - Reminder intents fire only when the flag is on and an email is set.

use crate::model::category::CategoryId;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::mutate::{self, TaskDefaults, TaskDraft, TaskPatch};
use crate::notify::ReminderScheduler;
use crate::repo::{CategoryRepository, RepoError, TaskRepository};
use crate::store::{CategoryStore, StoreError, TaskStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Bad input to a create/update.
    Validation(TaskValidationError),
    /// Mutation target does not exist.
    TaskNotFound(TaskId),
    /// Draft or patch names a category that is not stored.
    UnknownCategory(CategoryId),
    /// Loaded collections violate snapshot invariants.
    Store(StoreError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::UnknownCategory(id) => write!(f, "unknown category: `{id}`"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for BoardServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RepoError> for BoardServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service over the category/task repositories.
pub struct BoardService<C, T, S>
where
    C: CategoryRepository,
    T: TaskRepository,
    S: ReminderScheduler,
{
    categories: C,
    tasks: T,
    scheduler: S,
    defaults: TaskDefaults,
}

impl<C, T, S> BoardService<C, T, S>
where
    C: CategoryRepository,
    T: TaskRepository,
    S: ReminderScheduler,
{
    /// Creates a service using the provided collaborators.
    pub fn new(categories: C, tasks: T, scheduler: S, defaults: TaskDefaults) -> Self {
        Self {
            categories,
            tasks,
            scheduler,
            defaults,
        }
    }

    /// Loads the full persisted state into fresh store snapshots.
    pub fn load_board(&self) -> Result<(CategoryStore, TaskStore), BoardServiceError> {
        let categories = CategoryStore::from_categories(self.categories.list_categories()?)?;
        let tasks = TaskStore::from_tasks(self.tasks.list_tasks()?)?;
        Ok((categories, tasks))
    }

    /// Creates a task from a draft and persists it.
    ///
    /// # Contract
    /// - A draft without a category falls back to the configured default.
    /// - The resolved category must exist.
    /// - Returns the created task; the caller installs it into its
    ///   current snapshot.
    pub fn create_task(
        &self,
        draft: TaskDraft,
        now_ms: i64,
    ) -> Result<Task, BoardServiceError> {
        let task = mutate::create_task(draft, &self.defaults, now_ms)?;
        self.ensure_category_exists(&task.category_id)?;
        self.tasks.save_task(&task)?;
        info!(
            "event=task_created module=service status=ok task_id={} category={}",
            task.id, task.category_id
        );
        self.hand_off_reminder(&task);
        Ok(task)
    }

    /// Merges a patch onto a stored task and persists the result.
    pub fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, BoardServiceError> {
        let existing = self
            .tasks
            .get_task(id)?
            .ok_or(BoardServiceError::TaskNotFound(id))?;
        let merged = mutate::update_task(&existing, patch)?;
        self.ensure_category_exists(&merged.category_id)?;
        self.tasks.save_task(&merged)?;
        info!(
            "event=task_updated module=service status=ok task_id={}",
            merged.id
        );
        self.hand_off_reminder(&merged);
        Ok(merged)
    }

    /// Replaces only the completion flag of a stored task.
    pub fn set_task_completed(
        &self,
        id: TaskId,
        completed: bool,
    ) -> Result<Task, BoardServiceError> {
        let existing = self
            .tasks
            .get_task(id)?
            .ok_or(BoardServiceError::TaskNotFound(id))?;
        let toggled = mutate::set_completed(&existing, completed);
        self.tasks.save_task(&toggled)?;
        info!(
            "event=task_completion module=service status=ok task_id={} completed={completed}",
            toggled.id
        );
        Ok(toggled)
    }

    fn ensure_category_exists(&self, category_id: &str) -> Result<(), BoardServiceError> {
        if self.categories.get_category(category_id)?.is_none() {
            return Err(BoardServiceError::UnknownCategory(category_id.to_string()));
        }
        Ok(())
    }

    fn hand_off_reminder(&self, task: &Task) {
        if !task.reminder {
            return;
        }
        if let Some(email) = task.reminder_email.as_deref() {
            self.scheduler
                .schedule_reminder(task.id, email, task.reminder_time);
        }
    }
}
