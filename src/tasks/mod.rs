pub mod error;
pub mod store;
pub mod task_api;
pub mod types;

pub use error::TaskError;
pub use store::TaskStore;
pub use types::{Task, TaskChanges, TaskDraft};
