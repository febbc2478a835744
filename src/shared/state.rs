use crate::config::AppConfig;
use crate::shared::utils::DbPool;
use crate::tasks::TaskStore;

#[derive(Clone)]
pub struct AppState {
    pub conn: DbPool,
    pub config: AppConfig,
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new(conn: DbPool, config: AppConfig) -> Self {
        Self {
            tasks: TaskStore::new(conn.clone()),
            conn,
            config,
        }
    }
}
