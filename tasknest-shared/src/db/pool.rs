//! # Connection Pool
//!
//! Pool construction with sane production defaults. The API config layer
//! overrides the URL and connection count from the environment; the rest
//! of the knobs stay at their defaults unless a deployment needs tuning.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL
    pub url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Connections kept open even when idle
    pub min_connections: u32,
    /// How long to wait for a connection before failing
    pub connect_timeout_seconds: u64,
    /// Close connections idle longer than this
    pub idle_timeout_seconds: Option<u64>,
    /// Recycle connections older than this
    pub max_lifetime_seconds: Option<u64>,
    /// Ping connections before handing them out
    pub test_before_acquire: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/tasknest".to_string(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_seconds: 30,
            idle_timeout_seconds: Some(600),
            max_lifetime_seconds: Some(1800),
            test_before_acquire: true,
        }
    }
}

/// Connects a pool and verifies it can actually serve a query.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating database connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(config.idle_timeout_seconds.map(Duration::from_secs))
        .max_lifetime(config.max_lifetime_seconds.map(Duration::from_secs))
        .test_before_acquire(config.test_before_acquire)
        .connect(&config.url)
        .await?;

    health_check(&pool).await?;
    tracing::debug!("Database connection pool ready");

    Ok(pool)
}

/// One round trip to the database.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
