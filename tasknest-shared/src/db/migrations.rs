//! # Migrations
//!
//! SQL migrations are embedded from `migrations/` at compile time and
//! applied at startup, before the server accepts traffic.

use sqlx::PgPool;

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations complete");
    Ok(())
}
