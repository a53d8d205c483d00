//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use blog_api::model::Table;
use blog_api::store::{Filter, Row};
use blog_api::{app, AppState, MemoryStore, Store, StoreError};

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Build the full router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(MemoryStore::new()))
}

pub fn build_app_with(store: Arc<dyn Store>) -> Router {
    app(AppState::new(store), TEST_BODY_LIMIT)
}

/// Store double whose every call fails the way a managed store rejects a request.
pub struct FailingStore;

pub const STORE_FAILURE: &str = "connection refused by upstream store";

fn failure() -> StoreError {
    StoreError::Rejected {
        status: 503,
        message: STORE_FAILURE.to_string(),
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn insert(&self, _: Table, _: Row) -> Result<Vec<Row>, StoreError> {
        Err(failure())
    }

    async fn select(&self, _: Table, _: Option<&Filter>) -> Result<Vec<Row>, StoreError> {
        Err(failure())
    }

    async fn update(&self, _: Table, _: Row, _: &Filter) -> Result<Vec<Row>, StoreError> {
        Err(failure())
    }

    async fn delete(&self, _: Table, _: &Filter) -> Result<Vec<Row>, StoreError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(failure())
    }
}

/// Send a request with an optional JSON body; return status and parsed JSON response.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Assert the error envelope shape and return its message.
pub fn assert_failure(status: StatusCode, json: &Value, expected: StatusCode) -> String {
    assert_eq!(status, expected, "unexpected status, body: {json}");
    assert_eq!(json["success"], false);
    json["message"].as_str().expect("message must be a string").to_string()
}

/// Assert the success envelope shape and return `data`.
pub fn assert_success(status: StatusCode, json: &Value, message: &str) -> Value {
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {json}");
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], message);
    json["data"].clone()
}
