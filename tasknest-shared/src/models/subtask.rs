//! # SubTask Model
//!
//! Child items of a task. Subtasks are written by whoever holds a valid
//! token; the parent task's ownership is not consulted. Deleting a task
//! does not delete its subtasks.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE subtasks (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     task_id UUID NOT NULL,
//!     title VARCHAR(255) NOT NULL,
//!     username VARCHAR(255) NOT NULL,
//!     completed BOOLEAN NOT NULL DEFAULT FALSE,
//!     timing VARCHAR(255),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subtask record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SubTask {
    pub id: Uuid,
    /// Parent task id. No referential check is made against the tasks
    /// table, so this may point at a task that no longer exists.
    pub task_id: Uuid,
    pub title: String,
    /// Username of the principal who created the subtask
    pub username: String,
    pub completed: bool,
    /// Free-form scheduling note, e.g. "after lunch"
    pub timing: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert input for a subtask.
#[derive(Debug, Clone)]
pub struct NewSubTask {
    pub task_id: Uuid,
    pub title: String,
    pub username: String,
    pub completed: bool,
    pub timing: Option<String>,
}
