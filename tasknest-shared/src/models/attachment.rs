//! # Attachment Model
//!
//! File references attached to a task. Only the reference is stored;
//! the bytes live wherever `file_url` points.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE attachments (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     task_id UUID NOT NULL,
//!     file_name VARCHAR(512) NOT NULL,
//!     file_url VARCHAR(2048) NOT NULL,
//!     file_type VARCHAR(100),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An attachment record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attachment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    /// MIME type, if the client reported one
    pub file_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert input for an attachment.
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub task_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_type: Option<String>,
}
