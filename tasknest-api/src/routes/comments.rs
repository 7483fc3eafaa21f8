//! # Comment Routes
//!
//! `/api/tasks/:task_id/comments`. Comments are immutable: create,
//! list, delete. Author identity comes from the token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tasknest_shared::auth::AuthContext;
use tasknest_shared::models::{Comment, NewComment};

use crate::app::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1 to 2000 characters"))]
    pub content: String,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Comment>>> {
    let comments = state.stores.comments.list_by_task(task_id).await?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    request.validate()?;

    let comment = state
        .stores
        .comments
        .insert(NewComment {
            task_id,
            user_id: auth.user_id,
            username: auth.username,
            content: request.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((_task_id, comment_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    state.stores.comments.delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
