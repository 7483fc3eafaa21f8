//! Shared harness for the API suites: a full router over the in-memory
//! backend, plus token and request helpers. No external services are
//! touched.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use tower::Service;
use uuid::Uuid;

use tasknest_api::app::{build_router, AppState};
use tasknest_api::config::{ApiConfig, Config, JwtConfig, StorageBackend, StorageConfig};
use tasknest_shared::auth::jwt::{create_token, Claims};
use tasknest_shared::models::User;
use tasknest_shared::store::{MemoryStore, Stores};

pub const JWT_SECRET: &str = "integration-test-secret-32-chars-ok!";

pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub stores: Stores,
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let stores = Stores::memory(store.clone());
        let state = AppState::new(stores.clone(), None, test_config());
        let app = build_router(state);

        let user_id = Uuid::new_v4();
        let username = "ada".to_string();
        let token = mint_token(user_id, &username);

        Self {
            app,
            store,
            stores,
            user_id,
            username,
            token,
        }
    }

    /// Seeds the user row matching this context's token, for the
    /// profile endpoints.
    pub async fn seed_profile(&self) {
        let now = Utc::now();
        self.store
            .seed_user(User {
                id: self.user_id,
                username: self.username.clone(),
                password_hash: "managed-by-auth-service".to_string(),
                email: Some("ada@example.com".to_string()),
                full_name: Some("Ada Lovelace".to_string()),
                bio: None,
                profile_image: None,
                created_at: now,
                updated_at: now,
            })
            .await;
    }
}

/// Signs a token the router will accept.
pub fn mint_token(user_id: Uuid, username: &str) -> String {
    create_token(&Claims::new(user_id, username), JWT_SECRET).expect("failed to sign test token")
}

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
            production: false,
        },
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            database_url: None,
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
        },
    }
}

/// Request with a bearer token and an optional JSON body.
pub fn authed(
    method: Method,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Request without credentials.
pub fn anonymous(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Drives one request through the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().call(request).await.unwrap()
}

/// Reads a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
