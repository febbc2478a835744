use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Database model - matches schema exactly
#[derive(Debug, Clone, Serialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::shared::models::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Task {
    pub id: i32,
    pub content: String,
    pub complete: i32,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.complete != 0
    }
}

/// Input for a new task; `created_at` is assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub content: String,
    pub complete: i32,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::shared::models::schema::tasks)]
pub struct NewTask {
    pub content: String,
    pub complete: i32,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// Partial update; `None` leaves a column untouched, `Some(None)` on
/// `due_date` clears it.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::shared::models::schema::tasks)]
pub struct TaskChanges {
    pub content: Option<String>,
    pub complete: Option<i32>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.complete.is_none() && self.due_date.is_none()
    }
}

/// Raw fields of the create/edit HTML forms.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskForm {
    pub content: String,
    #[serde(default)]
    pub complete: Option<String>,
    #[serde(default)]
    pub duedate: Option<String>,
}
