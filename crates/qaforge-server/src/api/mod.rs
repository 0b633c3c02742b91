// ABOUTME: API module containing the JSON handlers for the qaforge REST API.
// ABOUTME: Organized into sub-modules for scenarios, the script document, and publishing.

pub mod publish;
pub mod scenarios;
pub mod script;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Build a `{"error": ...}` response with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}
