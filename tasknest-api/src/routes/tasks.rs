//! # Task Routes
//!
//! The task aggregate's public surface:
//!
//! - `GET /api/tasks` - the caller's tasks, decorated with subtasks and
//!   counts; `204 No Content` when there are none
//! - `POST /api/tasks` - create, owned by the caller
//! - `PUT /api/tasks/:task_id` - whole-value update, owner only
//! - `DELETE /api/tasks/:task_id` - delete, owner only
//!
//! Example list element:
//!
//! ```text
//! {
//!   "id": "0e3f...",
//!   "title": "Dentist",
//!   "priority": "medium",
//!   "status": "pending",
//!   "reminder": true,
//!   "reminder_time": "2026-09-01T09:00:00Z",
//!   "subtasks": [...],
//!   "subtask_count": 2,
//!   "completed_subtask_count": 1,
//!   "comment_count": 0,
//!   "attachment_count": 0
//! }
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tasknest_shared::auth::AuthContext;
use tasknest_shared::models::{CreateTask, Priority, Task, TaskStatus, UpdateTask};

use crate::app::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    #[validate(length(max = 4000, message = "Description must be at most 4000 characters"))]
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub reminder: Option<bool>,
    pub reminder_time: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    fn into_input(self) -> CreateTask {
        CreateTask {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            reminder: self.reminder,
            reminder_time: self.reminder_time,
        }
    }
}

/// Update payload. Same shape as creation: updates replace the mutable
/// fields wholesale, so clients send the full desired state.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    #[validate(length(max = 4000, message = "Description must be at most 4000 characters"))]
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub reminder: Option<bool>,
    pub reminder_time: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    fn into_input(self) -> UpdateTask {
        UpdateTask {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            reminder: self.reminder,
            reminder_time: self.reminder_time,
        }
    }
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Response> {
    let views = state.tasks.list_for_user(auth.user_id).await?;

    if views.is_empty() {
        tracing::debug!(user_id = %auth.user_id, "Task list is empty");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((StatusCode::OK, Json(views)).into_response())
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    request.validate()?;

    let task = state
        .tasks
        .create(auth.user_id, request.into_input())
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    request.validate()?;

    let task = state
        .tasks
        .update(task_id, auth.user_id, request.into_input())
        .await?;

    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.tasks.delete(task_id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
