//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("unsupported store url: {0} (expected postgres://, http(s):// or memory://)")]
    UnsupportedStore(String),
}

/// Failure reported by a store backend. The display text is passed to clients verbatim.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The store refused the operation, e.g. a non-2xx PostgREST answer or a value
    /// the column type cannot hold; `message` is the store's own error text.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MissingFields(String),
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },
    /// The body could not be read, e.g. it exceeded the size limit.
    #[error("Invalid request body: {detail}")]
    BodyRejected { status: StatusCode, detail: String },
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a store failure under the endpoint's failure message, for use with `map_err`.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::MissingFields(message) => (StatusCode::BAD_REQUEST, message, None),
            AppError::BadRequest { message, detail } => (StatusCode::BAD_REQUEST, message, detail),
            AppError::BodyRejected { status, detail } => {
                (status, "Invalid request body".to_string(), Some(detail))
            }
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.to_string(),
                    Some(source.to_string()),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(detail),
                )
            }
        };
        let body = ErrorBody {
            success: false,
            message,
            error,
        };
        (status, Json(body)).into_response()
    }
}
