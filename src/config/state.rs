// Application state module
// Bundles the loaded configuration with the shared database pool

use sqlx::PgPool;

use super::types::Config;

/// State shared by every in-flight request
pub struct AppState {
    pub config: Config,
    pub db: PgPool,
}

impl AppState {
    pub fn new(config: Config, db: PgPool) -> Self {
        Self { config, db }
    }
}
