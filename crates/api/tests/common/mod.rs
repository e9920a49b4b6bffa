#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use quire_api::app::build_app;
use quire_api::config::ServerConfig;
use quire_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a page size of 2 so paging is easy to
/// exercise with a handful of rows.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        page_size: 2,
        log_json: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app(state).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw string body with a JSON content type.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Create a tag through the API and return its id.
pub async fn create_tag(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tags",
        serde_json::json!({"name": name, "created_by": "tester", "state": 1}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an article through the API and return its id. A `tag_id` of 0
/// leaves the article untagged.
pub async fn create_article(pool: &PgPool, tag_id: i64, title: &str, state: i64) -> i64 {
    let mut body = serde_json::json!({
        "title": title,
        "desc": "d",
        "content": "c",
        "created_by": "tester",
        "state": state,
    });
    if tag_id > 0 {
        body["tag_id"] = tag_id.into();
    }

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/articles", body).await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
