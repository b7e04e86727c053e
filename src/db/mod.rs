// Database module entry point
// Owns pool construction and the startup liveness probe

pub mod todos;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Build the process-wide connection pool
pub async fn connect(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(&cfg.password)
        .database(&cfg.dbname);

    PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await
}

/// Trivial round-trip confirming the store answers before the listener
/// starts accepting traffic
pub async fn check_liveness(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar("SELECT NOW()").fetch_one(pool).await
}
