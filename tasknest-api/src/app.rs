//! # Application Assembly
//!
//! Shared state and router construction. Everything under `/api` sits
//! behind the JWT middleware; `/health` stays public for probes.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{delete, get, put};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use tasknest_shared::auth::create_jwt_middleware;
use tasknest_shared::service::TaskService;
use tasknest_shared::store::Stores;

use crate::config::Config;
use crate::middleware::security::SecurityHeadersLayer;
use crate::routes;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Storage handles, backend chosen at startup
    pub stores: Stores,
    /// Task workflows over those stores
    pub tasks: TaskService,
    /// Present only on the Postgres backend; the health probe pings it
    pub db: Option<PgPool>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(stores: Stores, db: Option<PgPool>, config: Config) -> Self {
        let tasks = TaskService::new(&stores);
        Self {
            stores,
            tasks,
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:task_id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route(
            "/:task_id/subtasks",
            get(routes::subtasks::list_subtasks).post(routes::subtasks::create_subtask),
        )
        .route(
            "/:task_id/subtasks/:subtask_id",
            put(routes::subtasks::update_subtask).delete(routes::subtasks::delete_subtask),
        )
        .route(
            "/:task_id/comments",
            get(routes::comments::list_comments).post(routes::comments::create_comment),
        )
        .route(
            "/:task_id/comments/:comment_id",
            delete(routes::comments::delete_comment),
        )
        .route(
            "/:task_id/attachments",
            get(routes::attachments::list_attachments).post(routes::attachments::create_attachment),
        )
        .route(
            "/:task_id/attachments/:attachment_id",
            delete(routes::attachments::delete_attachment),
        );

    let workout_routes = Router::new()
        .route(
            "/",
            get(routes::workouts::list_workouts).post(routes::workouts::create_workout),
        )
        .route("/:workout_id", delete(routes::workouts::delete_workout));

    let user_routes = Router::new().route(
        "/profile",
        get(routes::users::get_profile).put(routes::users::update_profile),
    );

    let api_routes = Router::new()
        .nest("/tasks", task_routes)
        .nest("/workouts", workout_routes)
        .nest("/users", user_routes)
        .layer(middleware::from_fn(create_jwt_middleware(
            state.config.jwt.secret.clone(),
        )));

    let cors = build_cors(&state.config);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

fn build_cors(config: &Config) -> CorsLayer {
    if config.api.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
