//! API Error Response
//!
//! Every handler failure becomes HTTP 500 with a fixed, operation-specific
//! message. The underlying cause is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const CREATE_FAILED: &str = "Failed to create todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

impl ApiError {
    /// Log `cause` and produce the static message for this operation
    pub fn internal(message: &'static str, cause: impl std::fmt::Display) -> Self {
        tracing::error!(%cause, "{}", message);
        Self { error: message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
