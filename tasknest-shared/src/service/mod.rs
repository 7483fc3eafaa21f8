//! # Services
//!
//! Workflows over the storage traits. The task service owns the rules
//! the API must not be able to get wrong: ownership checks before any
//! mutation, reminder defaulting, and whole-record merge updates. The
//! aggregator builds the decorated read model.

pub mod aggregation;
pub mod tasks;

pub use aggregation::Aggregator;
pub use tasks::TaskService;

use crate::store::StoreError;

/// Failures from task workflows. The API layer maps each variant to a
/// status code; everything under `Store` surfaces as an opaque 500.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("Task not found")]
    NotFound,

    #[error("Not authorized to modify this task")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}
