//! Database access for recipe-lab: connection pool, migrations, models and
//! repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on open connections (default: `20`).
    pub max_connections: u32,
    /// Connections kept open even when idle (default: `0`).
    pub min_connections: u32,
    /// Idle connections above `min_connections` are closed after this long (default: `600`).
    pub idle_timeout_secs: u64,
    /// How long a request waits for a free connection (default: `30`).
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load pool configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default  |
    /// |---------------------------|----------|
    /// | `DATABASE_URL`            | required |
    /// | `DB_MAX_CONNECTIONS`      | `20`     |
    /// | `DB_MIN_CONNECTIONS`      | `0`      |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`     |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let min_connections: u32 = std::env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("DB_MIN_CONNECTIONS must be a valid u32");

        let idle_timeout_secs: u64 = std::env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("DB_IDLE_TIMEOUT_SECS must be a valid u64");

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            database_url,
            max_connections,
            min_connections,
            idle_timeout_secs,
            acquire_timeout_secs,
        }
    }
}

/// Create the process-wide connection pool.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
