//! # Profile Routes
//!
//! `/api/users/profile` for the authenticated user. The `User` model
//! excludes its password hash from serialization, so handlers return it
//! directly. Accounts themselves are created by the auth service; a
//! valid token whose user row is missing gets a 404 here.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use validator::Validate;

use tasknest_shared::auth::AuthContext;
use tasknest_shared::models::{UpdateProfile, User};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// Editable profile fields. Whole-value semantics, like every other
/// update in the API: omitted fields are cleared.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(max = 255, message = "Full name must be at most 255 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,
    #[validate(length(max = 512, message = "Profile image URL must be at most 512 characters"))]
    pub profile_image: Option<String>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<User>> {
    let user = state
        .stores
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User profile not found".to_string()))?;

    Ok(Json(user))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<User>> {
    request.validate()?;

    let user = state
        .stores
        .users
        .update_profile(
            auth.user_id,
            UpdateProfile {
                email: request.email,
                full_name: request.full_name,
                bio: request.bio,
                profile_image: request.profile_image,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("User profile not found".to_string()))?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_email_fails_validation() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"email": "not-an-address"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_all_fields_optional() {
        let request: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());
    }
}
