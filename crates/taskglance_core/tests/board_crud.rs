use rusqlite::{params, Connection};
use std::cell::RefCell;
use taskglance_core::db::migrations::latest_version;
use taskglance_core::db::open_db_in_memory;
use taskglance_core::seed::{sample_board, seed_sample_board};
use taskglance_core::{
    BoardService, BoardServiceError, Category, CategoryRepository, Priority, ReminderScheduler,
    RepoError, SqliteCategoryRepository, SqliteTaskRepository, Task, TaskDefaults, TaskDraft,
    TaskId, TaskPatch, TaskRepository, TaskValidationError,
};
use uuid::Uuid;

#[test]
fn category_save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let category = Category::new("work", "Work", "#9b87f5");
    repo.save_category(&category).unwrap();

    let loaded = repo.get_category("work").unwrap().unwrap();
    assert_eq!(loaded, category);
    assert!(repo.get_category("missing").unwrap().is_none());
}

#[test]
fn category_save_is_an_upsert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    repo.save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();
    repo.save_category(&Category::new("work", "Day job", "#111111"))
        .unwrap();

    let listed = repo.list_categories().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Day job");
}

#[test]
fn task_save_and_get_roundtrip_preserves_every_field() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    categories
        .save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();

    let mut task = Task::new("quarterly review", "work", 1_745_000_000_000);
    task.description = "slides and dry run".to_string();
    task.due_date = Some(1_745_107_200_000);
    task.priority = Priority::High;
    task.reminder = true;
    task.reminder_email = Some("me@example.com".to_string());
    task.reminder_time = Some(1_745_100_000_000);

    tasks.save_task(&task).unwrap();

    let loaded = tasks.get_task(task.id).unwrap().unwrap();
    assert_eq!(loaded, task);
}

#[test]
fn task_save_is_an_upsert_that_keeps_list_order() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    categories
        .save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();

    let first = Task::new("first", "work", 1);
    let second = Task::new("second", "work", 2);
    tasks.save_task(&first).unwrap();
    tasks.save_task(&second).unwrap();

    let mut edited = first.clone();
    edited.title = "first, edited".to_string();
    tasks.save_task(&edited).unwrap();

    let listed = tasks.list_tasks().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].title, "first, edited");
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn validation_failure_blocks_the_write() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    categories
        .save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();

    let mut invalid = Task::new("reminder with no email", "work", 0);
    invalid.reminder = true;

    let err = tasks.save_task(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::MissingReminderEmail)
    ));
    assert!(tasks.list_tasks().unwrap().is_empty());
}

#[test]
fn stale_reminder_payload_is_absent_after_load() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    categories
        .save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();

    // Write the stale row directly; the repository would never produce it.
    conn.execute(
        "INSERT INTO tasks (
            uuid, title, description, completed, due_date, priority,
            category_id, created_at, reminder, reminder_email, reminder_time
        ) VALUES (?1, 'stale', '', 0, NULL, 'medium', 'work', 0, 0, 'old@example.com', 42);",
        params![Uuid::new_v4().to_string()],
    )
    .unwrap();

    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    let listed = tasks.list_tasks().unwrap();
    let loaded = &listed[0];
    assert!(!loaded.reminder);
    assert_eq!(loaded.reminder_email, None);
    assert_eq!(loaded.reminder_time, None);
}

#[test]
fn corrupt_rows_are_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    categories
        .save_category(&Category::new("work", "Work", "#9b87f5"))
        .unwrap();

    conn.execute(
        "INSERT INTO tasks (
            uuid, title, description, completed, due_date, priority,
            category_id, created_at, reminder, reminder_email, reminder_time
        ) VALUES (?1, 'bad row', '', 0, NULL, 'urgent', 'work', 0, 0, NULL, NULL);",
        params![Uuid::new_v4().to_string()],
    )
    .unwrap();

    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    let err = tasks.list_tasks().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("urgent")));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteTaskRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tables() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCategoryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("categories"))
    ));
}

#[test]
fn repository_rejects_tasks_table_missing_reminder_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE categories (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            color TEXT NOT NULL
        );
        CREATE TABLE tasks (
            uuid TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            completed INTEGER NOT NULL DEFAULT 0,
            due_date INTEGER,
            priority TEXT NOT NULL DEFAULT 'medium',
            category_id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "tasks",
            column: "reminder"
        })
    ));
}

#[derive(Default)]
struct RecordingScheduler {
    calls: RefCell<Vec<(TaskId, String, Option<i64>)>>,
}

impl ReminderScheduler for &RecordingScheduler {
    fn schedule_reminder(&self, task_id: TaskId, email: &str, time: Option<i64>) {
        self.calls
            .borrow_mut()
            .push((task_id, email.to_string(), time));
    }
}

fn service_over<'conn>(
    conn: &'conn Connection,
    scheduler: &'conn RecordingScheduler,
) -> BoardService<
    SqliteCategoryRepository<'conn>,
    SqliteTaskRepository<'conn>,
    &'conn RecordingScheduler,
> {
    let categories = SqliteCategoryRepository::try_new(conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(conn).unwrap();
    seed_sample_board(&categories, &tasks).unwrap();
    BoardService::new(categories, tasks, scheduler, TaskDefaults::new("work"))
}

#[test]
fn load_board_rebuilds_the_snapshots() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let (categories, tasks) = service.load_board().unwrap();
    let (expected_categories, expected_tasks) = sample_board();

    assert_eq!(categories, expected_categories);
    assert_eq!(tasks, expected_tasks);
}

#[test]
fn service_create_persists_and_applies_the_default_category() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let created = service
        .create_task(TaskDraft::titled("triage inbox"), 1_745_000_000_000)
        .unwrap();
    assert_eq!(created.category_id, "work");

    let (_, tasks) = service.load_board().unwrap();
    assert_eq!(tasks.len(), 9);
    assert_eq!(tasks.get(created.id).unwrap(), &created);
    assert!(scheduler.calls.borrow().is_empty());
}

#[test]
fn service_rejects_unknown_categories() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let draft = TaskDraft {
        category_id: Some("garage".to_string()),
        ..TaskDraft::titled("fix the bike")
    };
    let err = service.create_task(draft, 0).unwrap_err();
    assert!(matches!(err, BoardServiceError::UnknownCategory(id) if id == "garage"));
}

#[test]
fn service_update_misses_are_semantic_errors() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let ghost = Uuid::new_v4();
    let err = service.update_task(ghost, &TaskPatch::default()).unwrap_err();
    assert!(matches!(err, BoardServiceError::TaskNotFound(id) if id == ghost));
}

#[test]
fn service_hands_reminder_intents_to_the_scheduler() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let draft = TaskDraft {
        reminder: true,
        reminder_email: Some("me@example.com".to_string()),
        reminder_time: Some(1_745_100_000_000),
        ..TaskDraft::titled("submit taxes")
    };
    let created = service.create_task(draft, 1_745_000_000_000).unwrap();

    let calls = scheduler.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        (
            created.id,
            "me@example.com".to_string(),
            Some(1_745_100_000_000)
        )
    );
}

#[test]
fn service_toggle_only_touches_completion() {
    let conn = open_db_in_memory().unwrap();
    let scheduler = RecordingScheduler::default();
    let service = service_over(&conn, &scheduler);

    let (_, tasks) = service.load_board().unwrap();
    let target = tasks.tasks()[4].clone();
    assert!(!target.completed);

    let toggled = service.set_task_completed(target.id, true).unwrap();
    assert!(toggled.completed);
    assert_eq!(
        Task {
            completed: target.completed,
            ..toggled
        },
        target
    );

    let (_, reloaded) = service.load_board().unwrap();
    assert!(reloaded.get(target.id).unwrap().completed);
}
