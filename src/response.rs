//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{ success, message, data }` returned by every successful API call.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

pub fn success<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message,
            data,
        }),
    )
}
