use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    NotFound(i32),
    #[error("invalid due date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid content: {0}")]
    InvalidContent(String),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("blocking task failed: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

impl TaskError {
    pub fn status(&self) -> StatusCode {
        match self {
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::InvalidDate(_) | TaskError::InvalidContent(_) => StatusCode::BAD_REQUEST,
            TaskError::Database(_) | TaskError::Pool(_) | TaskError::Runtime(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
