use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use taskserver::config::AppConfig;
use taskserver::shared::state::AppState;
use taskserver::shared::utils::{create_conn, run_migrations};
use taskserver::tasks::task_api::task_routes;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let pool = create_conn(&config.database_url())?;
    run_migrations(&pool)?;
    info!("database ready at {}", config.database_url());

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(pool, config));
    let app = task_routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("taskserver listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
