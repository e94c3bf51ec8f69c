#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sara_api::config::ServerConfig;
use sara_api::router::build_app_router;
use sara_api::state::AppState;
use sara_db::{Store, StoreResolver};

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows any CORS origin and never seeds sample sites.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_sample_sites: false,
    }
}

/// Build the full application router with all middleware layers over the
/// given store.
///
/// This goes through the same `build_app_router` as `main.rs` so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(store: Store) -> Router {
    let config = test_config();
    let state = AppState::new(StoreResolver::resolved(store), config.clone());
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a site through the API and return its JSON.
pub async fn create_site(store: &Store, name: &str) -> serde_json::Value {
    let app = build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/sites",
        serde_json::json!({ "name": name, "managerId": "mgr-1" }),
    )
    .await;
    body_json(response).await
}
