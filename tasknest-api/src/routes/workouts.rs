//! # Workout Routes
//!
//! `/api/workouts`, the workout log. Unlike tasks, an empty list is a
//! plain `200` with `[]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tasknest_shared::auth::AuthContext;
use tasknest_shared::models::{NewWorkout, Workout};

use crate::app::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: Option<i32>,
    /// Defaults to the current time when omitted
    pub date: Option<DateTime<Utc>>,
}

pub async fn list_workouts(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Workout>>> {
    let workouts = state.stores.workouts.list_by_user(auth.user_id).await?;
    Ok(Json(workouts))
}

pub async fn create_workout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<Workout>)> {
    request.validate()?;

    let workout = state
        .stores
        .workouts
        .insert(NewWorkout {
            user_id: auth.user_id,
            name: request.name,
            duration: request.duration,
            date: request.date.unwrap_or_else(Utc::now),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.stores.workouts.delete(workout_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
