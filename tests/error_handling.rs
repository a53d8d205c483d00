//! Tests for `AppError` → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use blog_api::{AppError, StoreError};
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn missing_fields_is_400_without_error_detail() {
    let (status, json) =
        error_to_response(AppError::MissingFields("Missing required fields".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing required fields");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn store_error_is_500_and_passes_store_text_through() {
    let err = AppError::Store {
        message: "Failed to create user",
        source: StoreError::Rejected {
            status: 409,
            message: "duplicate key value violates unique constraint \"users_email_key\"".into(),
        },
    };
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to create user");
    assert_eq!(
        json["error"],
        "duplicate key value violates unique constraint \"users_email_key\""
    );
}

#[tokio::test]
async fn bad_request_carries_detail() {
    let err = AppError::BadRequest {
        message: "Invalid JSON body".into(),
        detail: Some("EOF while parsing an object at line 1 column 1".into()),
    };
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid JSON body");
    assert!(json["error"].as_str().unwrap().contains("EOF"));
}

#[tokio::test]
async fn body_rejection_keeps_its_status() {
    let err = AppError::BodyRejected {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        detail: "length limit exceeded".into(),
    };
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid request body");
    assert_eq!(json["error"], "length limit exceeded");
}

#[tokio::test]
async fn internal_error_is_500() {
    let (status, json) = error_to_response(AppError::Internal("hashing failed".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Internal server error");
}

#[test]
fn store_helper_wraps_source() {
    let err = AppError::store("Failed to delete comment")(StoreError::Unavailable("down".into()));
    assert_eq!(err.to_string(), "Failed to delete comment: down");
}
