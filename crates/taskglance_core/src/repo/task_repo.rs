//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist every task mutation and reload the full collection at start.
//!
//! # Invariants
//! - Writes validate the record first; nothing invalid reaches SQL.
//! - Reads normalize stale reminder payloads (flag off means no payload)
//!   and reject rows that cannot be mapped back to a valid task.
//! - `list_tasks` returns insertion order; upserts keep row identity, so
//!   edits never reorder the list.

use crate::model::task::{Priority, Task, TaskId};
use crate::repo::{bool_to_int, ensure_schema_ready, int_to_bool, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    completed,
    due_date,
    priority,
    category_id,
    created_at,
    reminder,
    reminder_email,
    reminder_time
FROM tasks";

/// Repository interface for task persistence.
pub trait TaskRepository {
    /// Inserts or updates one task (save-on-mutation semantics).
    fn save_task(&self, task: &Task) -> RepoResult<()>;
    /// Gets one task by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists all tasks in insertion order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Wraps a connection after checking it is fully migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn save_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        let mut record = task.clone();
        record.normalize_reminder();

        self.conn.execute(
            "INSERT INTO tasks (
                uuid,
                title,
                description,
                completed,
                due_date,
                priority,
                category_id,
                created_at,
                reminder,
                reminder_email,
                reminder_time
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(uuid) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                completed = excluded.completed,
                due_date = excluded.due_date,
                priority = excluded.priority,
                category_id = excluded.category_id,
                reminder = excluded.reminder,
                reminder_email = excluded.reminder_email,
                reminder_time = excluded.reminder_time,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                record.id.to_string(),
                record.title.as_str(),
                record.description.as_str(),
                bool_to_int(record.completed),
                record.due_date,
                priority_to_db(record.priority),
                record.category_id.as_str(),
                record.created_at,
                bool_to_int(record.reminder),
                record.reminder_email.as_deref(),
                record.reminder_time,
            ],
        )?;

        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in tasks.priority"
        ))
    })?;

    let completed = int_to_bool(row.get("completed")?, "tasks.completed")?;
    let reminder = int_to_bool(row.get("reminder")?, "tasks.reminder")?;

    let mut task = Task {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        completed,
        due_date: row.get("due_date")?,
        priority,
        category_id: row.get("category_id")?,
        created_at: row.get("created_at")?,
        reminder,
        reminder_email: row.get("reminder_email")?,
        reminder_time: row.get("reminder_time")?,
    };
    task.normalize_reminder();
    task.validate()?;
    Ok(task)
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}
