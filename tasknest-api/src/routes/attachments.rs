//! # Attachment Routes
//!
//! `/api/tasks/:task_id/attachments`. Stores file references only;
//! uploading and serving the bytes is someone else's job.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tasknest_shared::models::{Attachment, NewAttachment};

use crate::app::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAttachmentRequest {
    #[validate(length(min = 1, max = 512, message = "File name must be 1 to 512 characters"))]
    pub file_name: String,
    #[validate(length(min = 1, max = 2048, message = "File URL must be 1 to 2048 characters"))]
    pub file_url: String,
    #[validate(length(max = 100, message = "File type must be at most 100 characters"))]
    pub file_type: Option<String>,
}

pub async fn list_attachments(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Attachment>>> {
    let attachments = state.stores.attachments.list_by_task(task_id).await?;
    Ok(Json(attachments))
}

pub async fn create_attachment(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<CreateAttachmentRequest>,
) -> ApiResult<(StatusCode, Json<Attachment>)> {
    request.validate()?;

    let attachment = state
        .stores
        .attachments
        .insert(NewAttachment {
            task_id,
            file_name: request.file_name,
            file_url: request.file_url,
            file_type: request.file_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(attachment)))
}

pub async fn delete_attachment(
    State(state): State<AppState>,
    Path((_task_id, attachment_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    state.stores.attachments.delete(attachment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
