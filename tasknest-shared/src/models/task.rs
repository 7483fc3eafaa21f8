//! # Task Model
//!
//! The root record of the task aggregate. A task belongs to exactly one
//! user, and only that user may update or delete it; subtasks, comments,
//! and attachments hang off a task by id.
//!
//! Stored rows never carry derived data. Counts and the embedded subtask
//! list are computed at read time and returned as a [`TaskView`], so a
//! write to one record can never leave a stale rollup behind.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     user_id UUID NOT NULL,
//!     title VARCHAR(255) NOT NULL,
//!     description TEXT,
//!     due_date TIMESTAMPTZ,
//!     priority task_priority NOT NULL DEFAULT 'medium',
//!     status task_status NOT NULL DEFAULT 'pending',
//!     reminder BOOLEAN NOT NULL DEFAULT FALSE,
//!     reminder_time TIMESTAMPTZ,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subtask::SubTask;

/// Task priority, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// String representation matching the database enum values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Completion state of a task. There is no workflow between the two
/// values; clients flip the status directly through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl TaskStatus {
    /// String representation matching the database enum values.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A task record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task identifier
    pub id: Uuid,
    /// Owning user. Every mutation checks the acting principal against
    /// this field before touching the record.
    pub user_id: Uuid,
    /// Short human-readable title (required, non-blank)
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// When the task is due, if scheduled
    pub due_date: Option<DateTime<Utc>>,
    /// Urgency bucket
    pub priority: Priority,
    /// Pending or completed
    pub status: TaskStatus,
    /// Whether a reminder is wanted for this task
    pub reminder: bool,
    /// When the reminder should fire. May be absent even when `reminder`
    /// is set, if neither a time nor a due date was supplied.
    pub reminder_time: Option<DateTime<Utc>>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating a task.
///
/// `reminder` and `reminder_time` arrive raw here; the task service runs
/// them through the defaulting policy in [`crate::reminder`] before the
/// record is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub reminder: Option<bool>,
    pub reminder_time: Option<DateTime<Utc>>,
}

/// Client payload for updating a task.
///
/// Updates replace every mutable field wholesale: an absent optional
/// field clears the stored value rather than preserving it. Identity
/// fields (`id`, `user_id`, `created_at`) are never taken from the
/// payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub reminder: Option<bool>,
    pub reminder_time: Option<DateTime<Utc>>,
}

/// Fully resolved insert input handed to a task store.
///
/// Unlike [`CreateTask`] this carries the owner and a reminder pair that
/// already went through the defaulting policy.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub reminder: bool,
    pub reminder_time: Option<DateTime<Utc>>,
}

/// Read model for task listings: the stored record plus derived data.
///
/// The subtask list is materialized in full, and the two subtask counts
/// are computed from that same list so they can never disagree with it.
/// Comment and attachment counts come from their stores.
///
/// ```
/// use chrono::Utc;
/// use uuid::Uuid;
/// use tasknest_shared::models::{Priority, Task, TaskStatus, TaskView};
///
/// let now = Utc::now();
/// let task = Task {
///     id: Uuid::new_v4(),
///     user_id: Uuid::new_v4(),
///     title: "Pack for the move".to_string(),
///     description: None,
///     due_date: None,
///     priority: Priority::Medium,
///     status: TaskStatus::Pending,
///     reminder: false,
///     reminder_time: None,
///     created_at: now,
///     updated_at: now,
/// };
///
/// let view = TaskView::new(task, Vec::new(), 0, 0);
/// assert_eq!(view.subtask_count, 0);
/// assert_eq!(view.completed_subtask_count, 0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    /// All subtasks of this task, oldest first
    pub subtasks: Vec<SubTask>,
    pub subtask_count: i64,
    pub completed_subtask_count: i64,
    pub comment_count: i64,
    pub attachment_count: i64,
}

impl TaskView {
    /// Builds a view from a stored task and its fetched children. Subtask
    /// counts are derived from the `subtasks` argument itself.
    pub fn new(
        task: Task,
        subtasks: Vec<SubTask>,
        comment_count: i64,
        attachment_count: i64,
    ) -> Self {
        let subtask_count = subtasks.len() as i64;
        let completed_subtask_count = subtasks.iter().filter(|s| s.completed).count() as i64;

        Self {
            task,
            subtasks,
            subtask_count,
            completed_subtask_count,
            comment_count,
            attachment_count,
        }
    }
}
