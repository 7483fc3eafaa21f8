//! # Task Service
//!
//! Every task mutation follows the same path: load the record, check
//! ownership against the acting principal, build the merged record,
//! write it back whole. The principal always arrives as an explicit
//! argument; there is no ambient "current user" anywhere below the
//! HTTP layer.

use uuid::Uuid;

use crate::auth::ownership::{check_owner, Ownership};
use crate::models::{CreateTask, NewTask, Task, TaskView, UpdateTask};
use crate::reminder;
use crate::store::{Stores, TaskStore};

use super::{Aggregator, TaskError};

use std::sync::Arc;

/// Task workflows: list, create, update, delete.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    aggregator: Aggregator,
}

impl TaskService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            tasks: stores.tasks.clone(),
            aggregator: Aggregator::new(
                stores.subtasks.clone(),
                stores.comments.clone(),
                stores.attachments.clone(),
            ),
        }
    }

    /// All of the user's tasks, oldest first, each decorated with its
    /// subtasks and counts.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<TaskView>, TaskError> {
        let tasks = self.tasks.list_by_user(user_id).await?;

        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            views.push(self.aggregator.decorate(task).await?);
        }

        Ok(views)
    }

    /// Creates a task owned by the acting user.
    pub async fn create(&self, user_id: Uuid, input: CreateTask) -> Result<Task, TaskError> {
        validate_title(&input.title)?;

        let (reminder, reminder_time) =
            reminder::normalize(input.reminder, input.reminder_time, input.due_date);

        let task = self
            .tasks
            .insert(NewTask {
                user_id,
                title: input.title,
                description: input.description,
                due_date: input.due_date,
                priority: input.priority,
                status: input.status,
                reminder,
                reminder_time,
            })
            .await?;

        tracing::info!(task_id = %task.id, user_id = %user_id, "Task created");
        Ok(task)
    }

    /// Replaces a task's mutable fields. Only the owner may update;
    /// anyone else gets `Forbidden` and the record is left untouched.
    pub async fn update(
        &self,
        task_id: Uuid,
        user_id: Uuid,
        input: UpdateTask,
    ) -> Result<Task, TaskError> {
        validate_title(&input.title)?;

        let current = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        match check_owner(current.user_id, user_id) {
            Ownership::Allowed => {}
            Ownership::Forbidden => {
                tracing::warn!(
                    task_id = %task_id,
                    user_id = %user_id,
                    "Rejected update of another user's task"
                );
                return Err(TaskError::Forbidden);
            }
        }

        let (reminder, reminder_time) =
            reminder::normalize(input.reminder, input.reminder_time, input.due_date);

        // Merged record: identity and creation time from the stored task,
        // every mutable field from the payload.
        let merged = Task {
            id: current.id,
            user_id: current.user_id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            status: input.status,
            reminder,
            reminder_time,
            created_at: current.created_at,
            updated_at: current.updated_at,
        };

        // The task can vanish between the lookup and the write; the store
        // reports that as a miss rather than resurrecting the record.
        let updated = self
            .tasks
            .update(merged)
            .await?
            .ok_or(TaskError::NotFound)?;

        tracing::info!(task_id = %updated.id, user_id = %user_id, "Task updated");
        Ok(updated)
    }

    /// Deletes a task after the same lookup and ownership check as
    /// updates. Subtasks, comments, and attachments are left in place.
    pub async fn delete(&self, task_id: Uuid, user_id: Uuid) -> Result<(), TaskError> {
        let current = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        match check_owner(current.user_id, user_id) {
            Ownership::Allowed => {}
            Ownership::Forbidden => {
                tracing::warn!(
                    task_id = %task_id,
                    user_id = %user_id,
                    "Rejected delete of another user's task"
                );
                return Err(TaskError::Forbidden);
            }
        }

        self.tasks.delete(task_id).await?;

        tracing::info!(task_id = %task_id, user_id = %user_id, "Task deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::Validation("Title must not be empty".to_string()));
    }
    Ok(())
}
