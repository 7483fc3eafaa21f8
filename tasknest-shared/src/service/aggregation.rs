//! # Read-Time Aggregation
//!
//! Task rows never store counts. When a listing is served, each task is
//! decorated here: the subtask list is fetched and embedded, subtask
//! counts are derived from that list, and comment and attachment counts
//! are asked of their stores. Three extra store calls per task is the
//! accepted cost of rollups that cannot go stale.

use std::sync::Arc;

use crate::models::{Task, TaskView};
use crate::store::{AttachmentStore, CommentStore, StoreError, SubTaskStore};

/// Builds [`TaskView`]s from stored tasks.
#[derive(Clone)]
pub struct Aggregator {
    subtasks: Arc<dyn SubTaskStore>,
    comments: Arc<dyn CommentStore>,
    attachments: Arc<dyn AttachmentStore>,
}

impl Aggregator {
    pub fn new(
        subtasks: Arc<dyn SubTaskStore>,
        comments: Arc<dyn CommentStore>,
        attachments: Arc<dyn AttachmentStore>,
    ) -> Self {
        Self {
            subtasks,
            comments,
            attachments,
        }
    }

    /// Decorates one task with its subtasks and counts.
    pub async fn decorate(&self, task: Task) -> Result<TaskView, StoreError> {
        let subtasks = self.subtasks.list_by_task(task.id).await?;
        let comment_count = self.comments.count_by_task(task.id).await?;
        let attachment_count = self.attachments.count_by_task(task.id).await?;

        Ok(TaskView::new(
            task,
            subtasks,
            comment_count,
            attachment_count,
        ))
    }
}
