//! # Database
//!
//! Connection pooling and embedded migrations for the Postgres backend.
//! Nothing here runs when the in-memory backend is selected.

pub mod migrations;
pub mod pool;

pub use migrations::run_migrations;
pub use pool::{create_pool, health_check, DatabaseConfig};
