//! HTTP-level integration tests for project CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app_no_backend, create_project, delete, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201_with_defaults(pool: PgPool) {
    let app = build_test_app_no_backend(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "ownerId": "user-1",
            "title": "T",
            "problem": "P"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["title"], "T");
    assert_eq!(json["problem"], "P");
    assert_eq!(json["area"], serde_json::Value::Null);
    assert_eq!(json["rigorScore"], 0);
    assert_eq!(json["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_blank_title_returns_400(pool: PgPool) {
    let app = build_test_app_no_backend(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "ownerId": "user-1", "title": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_blank_owner_returns_400(pool: PgPool) {
    let app = build_test_app_no_backend(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "ownerId": "", "title": "T" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_project_round_trip(pool: PgPool) {
    let id = create_project(build_test_app_no_backend(pool.clone()), "user-1", "Get Me").await;

    let response = get(
        build_test_app_no_backend(pool),
        &format!("/api/v1/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let response = get(build_test_app_no_backend(pool), "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_requires_owner_param(pool: PgPool) {
    let response = get(build_test_app_no_backend(pool), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_owner_scoped(pool: PgPool) {
    create_project(build_test_app_no_backend(pool.clone()), "alice", "A1").await;
    create_project(build_test_app_no_backend(pool.clone()), "bob", "B1").await;

    let response = get(
        build_test_app_no_backend(pool),
        "/api/v1/projects?owner=alice",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "A1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_updates_fields_and_reports_changes(pool: PgPool) {
    let id = create_project(build_test_app_no_backend(pool.clone()), "user-1", "Before").await;

    let response = patch_json(
        build_test_app_no_backend(pool),
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({ "title": "After", "methodology": "Survey, n=40" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "After");
    assert_eq!(json["methodology"], "Survey, n=40");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_unknown_project_returns_404(pool: PgPool) {
    let response = patch_json(
        build_test_app_no_backend(pool),
        "/api/v1/projects/999999",
        serde_json::json!({ "title": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_idempotent(pool: PgPool) {
    let id = create_project(build_test_app_no_backend(pool.clone()), "user-1", "Bye").await;

    let response = delete(
        build_test_app_no_backend(pool.clone()),
        &format!("/api/v1/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Second delete of the same id is still 204.
    let response = delete(
        build_test_app_no_backend(pool),
        &format!("/api/v1/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
