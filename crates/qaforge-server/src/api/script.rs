// ABOUTME: JSON handlers for the script document: read, overwrite, and regenerate.
// ABOUTME: Regeneration without a stored scenario batch answers 404 and leaves the script untouched.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::api::error_response;
use crate::api::scenarios::pipeline_error;
use crate::app_state::SharedState;

/// The script document as exchanged over the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScriptBody {
    pub content: String,
}

/// Response body after regenerating the script.
#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub content: String,
    pub failed: bool,
}

/// GET /api/script - Return the current script, empty if none exists.
pub async fn get_script(State(state): State<SharedState>) -> Response {
    match state.editor.get_content().await {
        Ok(content) => Json(ScriptBody { content }).into_response(),
        Err(e) => {
            tracing::error!("failed to read script: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// PUT /api/script - Overwrite the script with the given content.
pub async fn put_script(State(state): State<SharedState>, Json(body): Json<ScriptBody>) -> Response {
    match state.editor.set_content(body.content).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("failed to save script: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// POST /api/script/generate - Regenerate the script from the stored scenarios.
pub async fn generate_script(State(state): State<SharedState>) -> Response {
    match state.pipeline.generate_script().await {
        Ok(outcome) => Json(GenerateScriptResponse {
            content: outcome.content,
            failed: outcome.failed,
        })
        .into_response(),
        Err(e) => pipeline_error(e),
    }
}
