//! HTTP handlers for the task pages
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use log::{error, info};
use std::sync::Arc;

use crate::shared::state::AppState;
use crate::tasks::error::TaskError;
use crate::tasks::task_api::{html_renderers, utils};
use crate::tasks::types::TaskForm;

/// Handler for the task list page
pub async fn handle_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, TaskError> {
    let tasks = state.tasks.list_all().await.map_err(|e| {
        error!("[TASK_LIST] {}", e);
        e
    })?;
    Ok(Html(html_renderers::render_index(&tasks)))
}

/// Handler for task creation from the list page form
pub async fn handle_create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, TaskError> {
    let draft = utils::draft_from_form(form)?;
    let task = state.tasks.create(draft).await.map_err(|e| {
        error!("[TASK_CREATE] {}", e);
        e
    })?;
    info!("[TASK_CREATE] created task {}", task.id);
    Ok(Redirect::to("/"))
}

/// Handler for task deletion
pub async fn handle_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Redirect, TaskError> {
    state.tasks.delete(id).await.map_err(|e| {
        error!("[TASK_DELETE] {}", e);
        e
    })?;
    info!("[TASK_DELETE] deleted task {}", id);
    Ok(Redirect::to("/"))
}

/// Handler for the pre-filled edit form
pub async fn handle_edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, TaskError> {
    let task = state.tasks.get_by_id(id).await.map_err(|e| {
        error!("[TASK_EDIT] {}", e);
        e
    })?;
    Ok(Html(html_renderers::render_edit(&task)))
}

/// Handler for the edit form submission
pub async fn handle_edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, TaskError> {
    let changes = utils::changes_from_form(form)?;
    state.tasks.update(id, changes).await.map_err(|e| {
        error!("[TASK_EDIT] {}", e);
        e
    })?;
    info!("[TASK_EDIT] updated task {}", id);
    Ok(Redirect::to("/"))
}
