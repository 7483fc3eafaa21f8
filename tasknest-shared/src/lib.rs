//! # TaskNest Shared Library
//!
//! Domain models, storage backends, and services shared by the TaskNest
//! binaries. The API server composes these pieces; nothing in this crate
//! knows about HTTP routing beyond the authentication middleware.
//!
//! ## Modules
//!
//! - `models` - Task aggregate records and request inputs
//! - `store` - Storage traits with Postgres and in-memory backends
//! - `service` - Task workflows: authorization, merge updates, decoration
//! - `reminder` - Reminder-time defaulting policy
//! - `auth` - JWT validation, request authentication, ownership checks
//! - `db` - Connection pooling and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod reminder;
pub mod service;
pub mod store;

/// Shared library version, taken from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
