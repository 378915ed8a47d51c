#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use idol_api::config::{LogFormat, ServerConfig};
use idol_api::router::build_app_router;
use idol_api::state::AppState;
use idol_db::store::StoreBackend;
use idol_db::{IdolStore, MemoryIdolStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        doc_dir: PathBuf::from("./doc"),
        log_format: LogFormat::Text,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router around the given store and config.
pub fn build_app_with(store: Arc<dyn IdolStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router around the given store.
///
/// Cloning the `Arc` lets a test issue several requests against the same
/// data, one fresh router per request.
pub fn build_test_app(store: Arc<dyn IdolStore>) -> Router {
    build_app_with(store, test_config())
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn IdolStore> {
    Arc::new(MemoryIdolStore::new())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send an arbitrary (possibly malformed) string as a JSON body.
pub async fn send_raw_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
