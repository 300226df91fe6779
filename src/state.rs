use sqlx::SqlitePool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::session::SessionConfig;

/// Shared handles injected into every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub session_config: SessionConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            session_config: SessionConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    Ok(AppState::new(init_db_pool().await?))
}
