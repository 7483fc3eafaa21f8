//! # Comment Model
//!
//! Discussion entries on a task. Comments are immutable once written;
//! the only mutations are insert and delete.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE comments (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     task_id UUID NOT NULL,
//!     user_id UUID NOT NULL,
//!     username VARCHAR(255) NOT NULL,
//!     content TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub task_id: Uuid,
    /// Author id, taken from the authenticated principal
    pub user_id: Uuid,
    /// Author username, denormalized at write time for display
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Insert input for a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub task_id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub content: String,
}
