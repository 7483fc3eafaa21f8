//! # Subtask Routes
//!
//! Child CRUD under `/api/tasks/:task_id/subtasks`. Any authenticated
//! user may write here; the parent task's owner is not consulted, and
//! the parent is not even required to exist. The author's username is
//! taken from the token and denormalized into the record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tasknest_shared::auth::AuthContext;
use tasknest_shared::models::{NewSubTask, SubTask};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[validate(length(max = 255, message = "Timing must be at most 255 characters"))]
    pub timing: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[validate(length(max = 255, message = "Timing must be at most 255 characters"))]
    pub timing: Option<String>,
}

pub async fn list_subtasks(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Vec<SubTask>>> {
    let subtasks = state.stores.subtasks.list_by_task(task_id).await?;
    Ok(Json(subtasks))
}

pub async fn create_subtask(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<CreateSubTaskRequest>,
) -> ApiResult<(StatusCode, Json<SubTask>)> {
    request.validate()?;

    let subtask = state
        .stores
        .subtasks
        .insert(NewSubTask {
            task_id,
            title: request.title,
            username: auth.username,
            completed: request.completed,
            timing: request.timing,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(subtask)))
}

/// The only child operation that can 404: toggling or renaming a
/// subtask needs the record to still exist.
pub async fn update_subtask(
    State(state): State<AppState>,
    Path((_task_id, subtask_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateSubTaskRequest>,
) -> ApiResult<Json<SubTask>> {
    request.validate()?;

    let current = state
        .stores
        .subtasks
        .find_by_id(subtask_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subtask not found".to_string()))?;

    let merged = SubTask {
        title: request.title,
        completed: request.completed,
        timing: request.timing,
        ..current
    };

    let updated = state
        .stores
        .subtasks
        .update(merged)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subtask not found".to_string()))?;

    Ok(Json(updated))
}

pub async fn delete_subtask(
    State(state): State<AppState>,
    Path((_task_id, subtask_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    state.stores.subtasks.delete(subtask_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
