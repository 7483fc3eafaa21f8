//! # Storage
//!
//! Persistence sits behind one trait per record type. Lookups return
//! `Option` so callers must decide what a miss means, and updates write
//! whole records: the caller builds the merged value, the store replaces
//! the row. There are no partial updates and no cross-store transactions;
//! every operation touches exactly one record.
//!
//! Two backends implement the traits: [`PgStore`] over Postgres and
//! [`MemoryStore`] over plain vectors. The backend is chosen at startup
//! and handed around as a [`Stores`] bundle.
//!
//! ```
//! use std::sync::Arc;
//! use tasknest_shared::store::{MemoryStore, Stores};
//!
//! let stores = Stores::memory(Arc::new(MemoryStore::new()));
//! ```

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    Attachment, Comment, NewAttachment, NewComment, NewSubTask, NewTask, NewWorkout, SubTask,
    Task, UpdateProfile, User, Workout,
};

/// Errors surfaced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Task records.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task and returns it with id and timestamps assigned.
    async fn insert(&self, task: NewTask) -> Result<Task, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError>;

    /// All tasks owned by the user, oldest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Task>, StoreError>;

    /// Replaces the stored record wholesale and bumps `updated_at`.
    /// Returns `None` when the task no longer exists, e.g. after losing
    /// a race with a delete.
    async fn update(&self, task: Task) -> Result<Option<Task>, StoreError>;

    /// Removes the task. Returns whether a record was actually deleted.
    /// Child records are never touched.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Subtask records.
#[async_trait]
pub trait SubTaskStore: Send + Sync {
    async fn insert(&self, subtask: NewSubTask) -> Result<SubTask, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubTask>, StoreError>;

    /// All subtasks of the task, oldest first.
    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<SubTask>, StoreError>;

    /// Whole-record replace, as for tasks.
    async fn update(&self, subtask: SubTask) -> Result<Option<SubTask>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Comment records.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError>;

    /// All comments on the task, oldest first.
    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Comment>, StoreError>;

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Attachment records.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn insert(&self, attachment: NewAttachment) -> Result<Attachment, StoreError>;

    /// All attachments on the task, oldest first.
    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Attachment>, StoreError>;

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Workout records.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn insert(&self, workout: NewWorkout) -> Result<Workout, StoreError>;

    /// All workouts logged by the user, ordered by workout date.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Workout>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// User records. Accounts are provisioned by the auth service, so there
/// is no insert here; profiles are read and overwritten only.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Overwrites the editable profile fields. Returns `None` when no
    /// such user exists.
    async fn update_profile(
        &self,
        id: Uuid,
        profile: UpdateProfile,
    ) -> Result<Option<User>, StoreError>;
}

/// Handles to every store, all backed by the same backend instance.
#[derive(Clone)]
pub struct Stores {
    pub tasks: Arc<dyn TaskStore>,
    pub subtasks: Arc<dyn SubTaskStore>,
    pub comments: Arc<dyn CommentStore>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub workouts: Arc<dyn WorkoutStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    /// Stores backed by a Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::from_backend(Arc::new(PgStore::new(pool)))
    }

    /// Stores backed by an in-memory backend. The caller keeps the `Arc`
    /// so it can seed records directly.
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self::from_backend(store)
    }

    fn from_backend<S>(backend: Arc<S>) -> Self
    where
        S: TaskStore
            + SubTaskStore
            + CommentStore
            + AttachmentStore
            + WorkoutStore
            + UserStore
            + 'static,
    {
        Self {
            tasks: backend.clone(),
            subtasks: backend.clone(),
            comments: backend.clone(),
            attachments: backend.clone(),
            workouts: backend.clone(),
            users: backend,
        }
    }
}
