use std::path::PathBuf;
use std::sync::Arc;

use activity_signup::config::ServerConfig;
use activity_signup::database::ActivityCatalog;
use activity_signup::web;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub const CHESS_SIGNUP: &str = "/activities/Chess%20Club/signup";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        ..ServerConfig::default()
    }
}

/// Fresh router over a freshly seeded catalog; tests never share state.
pub fn build_test_app() -> Router {
    web::router(Arc::new(ActivityCatalog::seeded()), &test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub json: Value,
}

impl TestResponse {
    pub fn detail(&self) -> &str {
        self.json["detail"].as_str().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.json["message"].as_str().unwrap_or_default()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        text,
        json,
    }
}

pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let response = send(app, Method::GET, "/activities").await;
    assert_eq!(response.status, StatusCode::OK);
    serde_json::from_value(response.json[activity]["participants"].clone()).unwrap()
}
