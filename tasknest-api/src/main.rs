//! TaskNest API server.
//!
//! Loads configuration, connects the selected storage backend, runs
//! migrations when Postgres is in play, and serves the router until a
//! shutdown signal arrives.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tasknest_api::app::{build_router, AppState};
use tasknest_api::config::{Config, StorageBackend};
use tasknest_shared::db::{create_pool, run_migrations, DatabaseConfig};
use tasknest_shared::store::{MemoryStore, Stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tasknest_api=debug,tasknest_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(version = tasknest_shared::VERSION, "Starting TaskNest API");

    let (stores, db) = match config.storage.backend {
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;

            let pool = create_pool(&DatabaseConfig {
                url,
                max_connections: config.storage.max_connections,
                ..DatabaseConfig::default()
            })
            .await?;

            run_migrations(&pool).await?;

            (Stores::postgres(pool.clone()), Some(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory backend; data will not survive a restart");
            (Stores::memory(Arc::new(MemoryStore::new())), None)
        }
    };

    let state = AppState::new(stores, db, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "TaskNest API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to listen for the shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, stopping");
}
