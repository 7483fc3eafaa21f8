//! Child endpoints: subtasks, comments, attachments. These are plain
//! task-scoped CRUD with no ownership check against the parent task and
//! no requirement that the parent even exists.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{authed, body_json, mint_token, send, TestContext};

#[tokio::test]
async fn subtask_create_denormalizes_the_callers_username() {
    let ctx = TestContext::new();
    let task_id = Uuid::new_v4();

    let response = send(
        &ctx.app,
        authed(
            Method::POST,
            &format!("/api/tasks/{}/subtasks", task_id),
            &ctx.token,
            Some(json!({"title": "Buy tape", "timing": "after lunch"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["task_id"], task_id.to_string());
    assert_eq!(body["username"], ctx.username);
    assert_eq!(body["completed"], false);
    assert_eq!(body["timing"], "after lunch");
}

#[tokio::test]
async fn subtasks_accept_writes_from_non_owners_of_the_parent() {
    let ctx = TestContext::new();
    let stranger_token = mint_token(Uuid::new_v4(), "mallory");

    let task = body_json(
        send(
            &ctx.app,
            authed(
                Method::POST,
                "/api/tasks",
                &ctx.token,
                Some(json!({"title": "Shared board"})),
            ),
        )
        .await,
    )
    .await;

    // The parent belongs to ada; mallory can still attach a subtask.
    let response = send(
        &ctx.app,
        authed(
            Method::POST,
            &format!("/api/tasks/{}/subtasks", task["id"].as_str().unwrap()),
            &stranger_token,
            Some(json!({"title": "Drive-by item"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["username"], "mallory");
}

#[tokio::test]
async fn subtask_list_for_unknown_parent_is_an_empty_ok() {
    let ctx = TestContext::new();

    let response = send(
        &ctx.app,
        authed(
            Method::GET,
            &format!("/api/tasks/{}/subtasks", Uuid::new_v4()),
            &ctx.token,
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn subtask_update_replaces_fields_and_keeps_identity() {
    let ctx = TestContext::new();
    let task_id = Uuid::new_v4();

    let created = body_json(
        send(
            &ctx.app,
            authed(
                Method::POST,
                &format!("/api/tasks/{}/subtasks", task_id),
                &ctx.token,
                Some(json!({"title": "Draft", "timing": "morning"})),
            ),
        )
        .await,
    )
    .await;
    let subtask_id = created["id"].as_str().unwrap();

    let response = send(
        &ctx.app,
        authed(
            Method::PUT,
            &format!("/api/tasks/{}/subtasks/{}", task_id, subtask_id),
            &ctx.token,
            Some(json!({"title": "Final", "completed": true})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["title"], "Final");
    assert_eq!(body["completed"], true);
    // Whole-value update: the omitted timing is cleared.
    assert_eq!(body["timing"], serde_json::Value::Null);
    assert_eq!(body["username"], ctx.username);
}

#[tokio::test]
async fn subtask_update_of_missing_record_is_not_found() {
    let ctx = TestContext::new();

    let response = send(
        &ctx.app,
        authed(
            Method::PUT,
            &format!("/api/tasks/{}/subtasks/{}", Uuid::new_v4(), Uuid::new_v4()),
            &ctx.token,
            Some(json!({"title": "Nobody home"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn subtask_delete_is_no_content_even_for_missing_records() {
    let ctx = TestContext::new();

    let response = send(
        &ctx.app,
        authed(
            Method::DELETE,
            &format!("/api/tasks/{}/subtasks/{}", Uuid::new_v4(), Uuid::new_v4()),
            &ctx.token,
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn comment_lifecycle() {
    let ctx = TestContext::new();
    let task_id = Uuid::new_v4();
    let base = format!("/api/tasks/{}/comments", task_id);

    let created = body_json(
        send(
            &ctx.app,
            authed(
                Method::POST,
                &base,
                &ctx.token,
                Some(json!({"content": "looks good to me"})),
            ),
        )
        .await,
    )
    .await;
    assert_eq!(created["username"], ctx.username);
    assert_eq!(created["user_id"], ctx.user_id.to_string());

    let listed = body_json(send(&ctx.app, authed(Method::GET, &base, &ctx.token, None)).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["content"], "looks good to me");

    let response = send(
        &ctx.app,
        authed(
            Method::DELETE,
            &format!("{}/{}", base, created["id"].as_str().unwrap()),
            &ctx.token,
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(send(&ctx.app, authed(Method::GET, &base, &ctx.token, None)).await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn comment_rejects_empty_content() {
    let ctx = TestContext::new();

    let response = send(
        &ctx.app,
        authed(
            Method::POST,
            &format!("/api/tasks/{}/comments", Uuid::new_v4()),
            &ctx.token,
            Some(json!({"content": ""})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn attachment_lifecycle() {
    let ctx = TestContext::new();
    let task_id = Uuid::new_v4();
    let base = format!("/api/tasks/{}/attachments", task_id);

    let created = body_json(
        send(
            &ctx.app,
            authed(
                Method::POST,
                &base,
                &ctx.token,
                Some(json!({
                    "file_name": "floorplan.pdf",
                    "file_url": "https://files.example.com/floorplan.pdf",
                    "file_type": "application/pdf"
                })),
            ),
        )
        .await,
    )
    .await;
    assert_eq!(created["file_name"], "floorplan.pdf");
    assert_eq!(created["task_id"], task_id.to_string());

    let listed = body_json(send(&ctx.app, authed(Method::GET, &base, &ctx.token, None)).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = send(
        &ctx.app,
        authed(
            Method::DELETE,
            &format!("{}/{}", base, created["id"].as_str().unwrap()),
            &ctx.token,
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn attachment_requires_name_and_url() {
    let ctx = TestContext::new();

    let response = send(
        &ctx.app,
        authed(
            Method::POST,
            &format!("/api/tasks/{}/attachments", Uuid::new_v4()),
            &ctx.token,
            Some(json!({"file_name": "", "file_url": ""})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn children_survive_their_parents_deletion() {
    let ctx = TestContext::new();

    let task = body_json(
        send(
            &ctx.app,
            authed(
                Method::POST,
                "/api/tasks",
                &ctx.token,
                Some(json!({"title": "Doomed parent"})),
            ),
        )
        .await,
    )
    .await;
    let task_id = task["id"].as_str().unwrap().to_string();

    send(
        &ctx.app,
        authed(
            Method::POST,
            &format!("/api/tasks/{}/subtasks", task_id),
            &ctx.token,
            Some(json!({"title": "Orphan-to-be"})),
        ),
    )
    .await;

    let response = send(
        &ctx.app,
        authed(Method::DELETE, &format!("/api/tasks/{}", task_id), &ctx.token, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // No cascade: the subtask is still listable under the dead parent id.
    let orphans = body_json(
        send(
            &ctx.app,
            authed(
                Method::GET,
                &format!("/api/tasks/{}/subtasks", task_id),
                &ctx.token,
                None,
            ),
        )
        .await,
    )
    .await;
    assert_eq!(orphans.as_array().unwrap().len(), 1);
}
