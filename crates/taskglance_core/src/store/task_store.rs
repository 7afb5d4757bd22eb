//! Task store snapshot and copy-on-write transitions.

use crate::model::task::{Task, TaskId};
use crate::mutate;
use crate::store::StoreError;
use std::collections::HashSet;

/// Insertion-ordered snapshot of the task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Builds a store from records, rejecting duplicate ids.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(StoreError::DuplicateTask(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a new snapshot with `task` appended.
    pub fn with_created(&self, task: Task) -> Result<Self, StoreError> {
        if self.get(task.id).is_some() {
            return Err(StoreError::DuplicateTask(task.id));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Ok(Self { tasks })
    }

    /// Returns a new snapshot with the matching task replaced in place.
    ///
    /// The replaced task keeps its position, so list order is stable
    /// across edits.
    pub fn with_replaced(&self, task: Task) -> Result<Self, StoreError> {
        let position = self
            .tasks
            .iter()
            .position(|existing| existing.id == task.id)
            .ok_or(StoreError::TaskNotFound(task.id))?;
        let mut tasks = self.tasks.clone();
        tasks[position] = task;
        Ok(Self { tasks })
    }

    /// Returns a new snapshot with only the completion flag of `id` changed.
    pub fn with_completion(&self, id: TaskId, completed: bool) -> Result<Self, StoreError> {
        let existing = self.get(id).ok_or(StoreError::TaskNotFound(id))?;
        self.with_replaced(mutate::set_completed(existing, completed))
    }
}
