//! # Authentication Middleware
//!
//! Extracts the bearer token from the `Authorization` header, validates
//! it, and stores an [`AuthContext`] in the request extensions. Every
//! handler behind this layer receives the acting principal explicitly
//! via `Extension<AuthContext>`; nothing downstream reaches into
//! thread-local or ambient security state.

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::{validate_token, Claims};

/// The authenticated principal, as carried in request extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// User id from the token's subject claim
    pub user_id: Uuid,
    /// Username from the token, denormalized into child records
    pub username: String,
}

impl AuthContext {
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username.clone(),
        }
    }
}

/// Authentication failures, mapped straight to responses.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Authorization header must use the Bearer scheme")]
    InvalidFormat,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidFormat => StatusCode::BAD_REQUEST,
            AuthError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
        };
        (status, self.to_string()).into_response()
    }
}

/// Validates the request's bearer token and attaches the principal.
pub async fn jwt_auth_middleware(
    secret: String,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)?;

    let claims = validate_token(token, &secret).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AuthError::InvalidToken(e.to_string())
    })?;

    req.extensions_mut().insert(AuthContext::from_claims(&claims));

    Ok(next.run(req).await)
}

/// Builds a middleware closure bound to a secret, for use with
/// `axum::middleware::from_fn`.
pub fn create_jwt_middleware(
    secret: String,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Result<Response, AuthError>> + Send>> + Clone
{
    move |req, next| {
        let secret = secret.clone();
        Box::pin(async move { jwt_auth_middleware(secret, req, next).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::create_token;
    use axum::{body::Body, routing::get, Extension, Router};
    use chrono::Duration;
    use tower::Service;

    const SECRET: &str = "middleware-test-secret-32-chars-long";

    async fn whoami(Extension(auth): Extension<AuthContext>) -> String {
        format!("{}:{}", auth.user_id, auth.username)
    }

    fn protected_app() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn(create_jwt_middleware(
                SECRET.to_string(),
            )))
    }

    fn request(auth_header: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth_header {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "ada");

        let context = AuthContext::from_claims(&claims);
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.username, "ada");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let mut app = protected_app();
        let response = app.call(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let mut app = protected_app();
        let response = app
            .call(request(Some("Basic YWRhOnNlY3JldA==")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let mut app = protected_app();
        let response = app.call(request(Some("Bearer nonsense"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let claims = Claims::with_expiration(Uuid::new_v4(), "ada", Duration::hours(-2));
        let token = create_token(&claims, SECRET).unwrap();

        let mut app = protected_app();
        let response = app
            .call(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_context() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "ada");
        let token = create_token(&claims, SECRET).unwrap();

        let mut app = protected_app();
        let response = app
            .call(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], format!("{}:ada", user_id).as_bytes());
    }
}
