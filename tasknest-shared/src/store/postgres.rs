//! # Postgres Backend
//!
//! Implements every store trait over a shared connection pool. Queries
//! keep to one table each; list queries order by `created_at` so results
//! come back in insertion order.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    Attachment, Comment, NewAttachment, NewComment, NewSubTask, NewTask, NewWorkout, SubTask,
    Task, UpdateProfile, User, Workout,
};

use super::{
    AttachmentStore, CommentStore, StoreError, SubTaskStore, TaskStore, UserStore, WorkoutStore,
};

/// Postgres-backed storage.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn insert(&self, task: NewTask) -> Result<Task, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, due_date, priority, status, reminder, reminder_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, title, description, due_date, priority, status, reminder, reminder_time, created_at, updated_at
            "#,
        )
        .bind(task.user_id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.due_date)
        .bind(task.priority)
        .bind(task.status)
        .bind(task.reminder)
        .bind(task.reminder_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, due_date, priority, status, reminder, reminder_time, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, due_date, priority, status, reminder, reminder_time, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, task: Task) -> Result<Option<Task>, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, due_date = $4, priority = $5, status = $6, reminder = $7, reminder_time = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, title, description, due_date, priority, status, reminder, reminder_time, created_at, updated_at
            "#,
        )
        .bind(task.id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.due_date)
        .bind(task.priority)
        .bind(task.status)
        .bind(task.reminder)
        .bind(task.reminder_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SubTaskStore for PgStore {
    async fn insert(&self, subtask: NewSubTask) -> Result<SubTask, StoreError> {
        let subtask = sqlx::query_as::<_, SubTask>(
            r#"
            INSERT INTO subtasks (task_id, title, username, completed, timing)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, task_id, title, username, completed, timing, created_at
            "#,
        )
        .bind(subtask.task_id)
        .bind(subtask.title)
        .bind(subtask.username)
        .bind(subtask.completed)
        .bind(subtask.timing)
        .fetch_one(&self.pool)
        .await?;

        Ok(subtask)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubTask>, StoreError> {
        let subtask = sqlx::query_as::<_, SubTask>(
            r#"
            SELECT id, task_id, title, username, completed, timing, created_at
            FROM subtasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subtask)
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<SubTask>, StoreError> {
        let subtasks = sqlx::query_as::<_, SubTask>(
            r#"
            SELECT id, task_id, title, username, completed, timing, created_at
            FROM subtasks
            WHERE task_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(subtasks)
    }

    async fn update(&self, subtask: SubTask) -> Result<Option<SubTask>, StoreError> {
        let subtask = sqlx::query_as::<_, SubTask>(
            r#"
            UPDATE subtasks
            SET title = $2, completed = $3, timing = $4
            WHERE id = $1
            RETURNING id, task_id, title, username, completed, timing, created_at
            "#,
        )
        .bind(subtask.id)
        .bind(subtask.title)
        .bind(subtask.completed)
        .bind(subtask.timing)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subtask)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM subtasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (task_id, user_id, username, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, task_id, user_id, username, content, created_at
            "#,
        )
        .bind(comment.task_id)
        .bind(comment.user_id)
        .bind(comment.username)
        .bind(comment.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, task_id, user_id, username, content, created_at
            FROM comments
            WHERE task_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE task_id = $1")
            .bind(task_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AttachmentStore for PgStore {
    async fn insert(&self, attachment: NewAttachment) -> Result<Attachment, StoreError> {
        let attachment = sqlx::query_as::<_, Attachment>(
            r#"
            INSERT INTO attachments (task_id, file_name, file_url, file_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, task_id, file_name, file_url, file_type, created_at
            "#,
        )
        .bind(attachment.task_id)
        .bind(attachment.file_name)
        .bind(attachment.file_url)
        .bind(attachment.file_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(attachment)
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Attachment>, StoreError> {
        let attachments = sqlx::query_as::<_, Attachment>(
            r#"
            SELECT id, task_id, file_name, file_url, file_type, created_at
            FROM attachments
            WHERE task_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attachments)
    }

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attachments WHERE task_id = $1")
                .bind(task_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM attachments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl WorkoutStore for PgStore {
    async fn insert(&self, workout: NewWorkout) -> Result<Workout, StoreError> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (user_id, name, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, duration, date
            "#,
        )
        .bind(workout.user_id)
        .bind(workout.name)
        .bind(workout.duration)
        .bind(workout.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(workout)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Workout>, StoreError> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, duration, date
            FROM workouts
            WHERE user_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, email, full_name, bio, profile_image, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        profile: UpdateProfile,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2, full_name = $3, bio = $4, profile_image = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, password_hash, email, full_name, bio, profile_image, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(profile.email)
        .bind(profile.full_name)
        .bind(profile.bio)
        .bind(profile.profile_image)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
