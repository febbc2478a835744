use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::shared::models::schema::tasks::dsl;
use crate::shared::utils::DbPool;
use crate::tasks::error::TaskError;
use crate::tasks::types::{NewTask, Task, TaskChanges, TaskDraft};

pub const MAX_CONTENT_LEN: usize = 100;

/// Repository for task records, one pooled connection per operation.
#[derive(Clone)]
pub struct TaskStore {
    pool: DbPool,
}

impl TaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs a Diesel closure on the blocking thread pool.
    async fn run<F, T>(&self, f: F) -> Result<T, TaskError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, TaskError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await?
    }

    pub async fn create(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        validate_content(&draft.content)?;
        self.run(move |conn| {
            let record = NewTask {
                content: draft.content,
                complete: draft.complete,
                due_date: draft.due_date,
                created_at: Utc::now().naive_utc(),
            };
            let task = diesel::insert_into(dsl::tasks)
                .values(&record)
                .returning(Task::as_returning())
                .get_result(conn)?;
            Ok(task)
        })
        .await
    }

    pub async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        self.run(|conn| {
            let tasks = dsl::tasks
                .select(Task::as_select())
                .order(dsl::id.asc())
                .load(conn)?;
            Ok(tasks)
        })
        .await
    }

    pub async fn get_by_id(&self, task_id: i32) -> Result<Task, TaskError> {
        self.run(move |conn| {
            dsl::tasks
                .find(task_id)
                .select(Task::as_select())
                .first(conn)
                .optional()?
                .ok_or(TaskError::NotFound(task_id))
        })
        .await
    }

    pub async fn update(&self, task_id: i32, changes: TaskChanges) -> Result<Task, TaskError> {
        if let Some(content) = &changes.content {
            validate_content(content)?;
        }
        if changes.is_empty() {
            return self.get_by_id(task_id).await;
        }
        self.run(move |conn| {
            diesel::update(dsl::tasks.find(task_id))
                .set(&changes)
                .returning(Task::as_returning())
                .get_result(conn)
                .optional()?
                .ok_or(TaskError::NotFound(task_id))
        })
        .await
    }

    pub async fn delete(&self, task_id: i32) -> Result<(), TaskError> {
        self.run(move |conn| {
            let removed = diesel::delete(dsl::tasks.find(task_id)).execute(conn)?;
            if removed == 0 {
                return Err(TaskError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

fn validate_content(content: &str) -> Result<(), TaskError> {
    if content.trim().is_empty() {
        return Err(TaskError::InvalidContent(
            "content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(TaskError::InvalidContent(format!(
            "content exceeds {} characters",
            MAX_CONTENT_LEN
        )));
    }
    Ok(())
}
