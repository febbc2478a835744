use chrono::NaiveDate;

use crate::tasks::error::TaskError;
use crate::tasks::types::{TaskChanges, TaskDraft, TaskForm};

/// Maps the form's completion field to the 0/1 flag. Checkboxes submit
/// `on` when ticked and nothing at all when not.
pub fn parse_complete(raw: Option<&str>) -> i32 {
    match raw.map(str::trim) {
        Some("1") | Some("on") | Some("true") | Some("yes") => 1,
        _ => 0,
    }
}

/// Parses the optional `duedate` field; an empty string means no due date.
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, TaskError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| TaskError::InvalidDate(s.to_string())),
    }
}

pub fn draft_from_form(form: TaskForm) -> Result<TaskDraft, TaskError> {
    let due_date = parse_due_date(form.duedate.as_deref())?;
    Ok(TaskDraft {
        content: form.content,
        complete: parse_complete(form.complete.as_deref()),
        due_date,
    })
}

pub fn changes_from_form(form: TaskForm) -> Result<TaskChanges, TaskError> {
    let due_date = parse_due_date(form.duedate.as_deref())?;
    Ok(TaskChanges {
        content: Some(form.content),
        complete: Some(parse_complete(form.complete.as_deref())),
        due_date: Some(due_date),
    })
}
