pub mod handlers;
pub mod html_renderers;
pub mod utils;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::shared::state::AppState;

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::handle_index).post(handlers::handle_create))
        .route("/delete/:id", get(handlers::handle_delete))
        .route(
            "/edit/:id",
            get(handlers::handle_edit_form).post(handlers::handle_edit_submit),
        )
}
