//! Shared helpers for API integration tests.
//!
//! Requests go through `tower::ServiceExt::oneshot` against the real
//! router, so every test exercises the same middleware stack production
//! uses. The model backend is substituted with scripted stubs.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::util::ServiceExt;

use rigor_api::config::ServerConfig;
use rigor_api::engine::RunLocks;
use rigor_api::router::build_app_router;
use rigor_api::state::AppState;
use rigor_llm::{BackendError, DiagnosisBackend, DiagnosisRequest};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// A backend that always replies with a fixed raw string.
pub struct ScriptedBackend {
    pub reply: String,
}

impl ScriptedBackend {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl DiagnosisBackend for ScriptedBackend {
    async fn diagnose(&self, _request: &DiagnosisRequest) -> Result<String, BackendError> {
        Ok(self.reply.clone())
    }
}

/// A backend that always fails with an upstream error message.
pub struct FailingBackend;

#[async_trait]
impl DiagnosisBackend for FailingBackend {
    async fn diagnose(&self, _request: &DiagnosisRequest) -> Result<String, BackendError> {
        Err(BackendError::Api {
            status: 429,
            body: "rate limited".to_string(),
        })
    }
}

/// Build the application router with all middleware, a given pool, and a
/// given model backend.
pub fn build_test_app(pool: PgPool, backend: Arc<dyn DiagnosisBackend>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        backend,
        run_locks: Arc::new(RunLocks::new()),
    };
    build_app_router(state, &config)
}

/// Build the application router with a backend no test is expected to hit.
pub fn build_test_app_no_backend(pool: PgPool) -> Router {
    build_test_app(pool, Arc::new(ScriptedBackend::new("{}")))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::post(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::patch(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API and return its id.
pub async fn create_project(app: Router, owner: &str, title: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "ownerId": owner, "title": title }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
