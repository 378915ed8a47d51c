//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::fs;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // The response must contain "status", "version", and "db_healthy" fields.
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 with the standard error body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_json() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error_message"], "Resource not found");
}

#[tokio::test]
async fn unversioned_idols_path_returns_404() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/idols").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Wrong method on a known path returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_method_returns_405() {
    let app = common::build_test_app(common::memory_store());
    let response = common::delete(app, "/v1/idols").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id is generated and propagated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_carries_request_id() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_preserved() {
    let app = common::build_test_app(common::memory_store());
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("x-request-id", "test-id-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "test-id-123");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight from the allowed origin succeeds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = common::build_test_app(common::memory_store());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v1/idols")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

// ---------------------------------------------------------------------------
// Test: /doc serves static files from the configured directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn doc_serves_files_from_doc_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Idol API</h1>").unwrap();

    let mut config = common::test_config();
    config.doc_dir = dir.path().to_path_buf();
    let app = common::build_app_with(common::memory_store(), config);

    let response = get(app, "/doc/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<h1>Idol API</h1>");
}

#[tokio::test]
async fn doc_missing_file_returns_404() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = common::test_config();
    config.doc_dir = dir.path().to_path_buf();
    let app = common::build_app_with(common::memory_store(), config);

    let response = get(app, "/doc/missing.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
