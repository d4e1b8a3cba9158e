//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, ApiError>`. The variant decides the status
//! code; the message becomes the `{"error": ...}` body. `Internal` messages
//! are generic per route and never carry storage details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed id or request body (400).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No todo with the requested id (404).
    #[error("todo not found")]
    NotFound,

    /// Unexpected storage failure (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid(message: &str) -> Self {
        ApiError::InvalidInput(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::InvalidInput(msg) | ApiError::Internal(msg) => msg.as_str(),
            ApiError::NotFound => TODO_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
