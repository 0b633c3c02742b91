// ABOUTME: JSON handlers for generating and reading the current scenario batch.
// ABOUTME: Generation failures upstream still return 200 with the persisted TC_ERROR sentinel.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qaforge_core::{GenerationRequest, ScenarioBatch};
use serde::{Deserialize, Serialize};

use crate::api::error_response;
use crate::app_state::SharedState;
use crate::pipeline::PipelineError;

/// Request body for generating scenarios.
#[derive(Debug, Deserialize)]
pub struct GenerateScenariosRequest {
    pub area: String,
    pub count: i64,
}

/// Response body describing a scenario batch.
#[derive(Debug, Serialize)]
pub struct ScenariosResponse {
    pub scenarios: ScenarioBatch,
    pub sentinel: bool,
}

impl From<ScenarioBatch> for ScenariosResponse {
    fn from(batch: ScenarioBatch) -> Self {
        let sentinel = batch.is_sentinel();
        Self {
            scenarios: batch,
            sentinel,
        }
    }
}

/// POST /api/scenarios - Generate a new batch, replacing the stored one.
pub async fn generate_scenarios(
    State(state): State<SharedState>,
    Json(req): Json<GenerateScenariosRequest>,
) -> Response {
    let request = match GenerationRequest::new(&req.area, req.count) {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.pipeline.generate_scenarios(&request).await {
        Ok(batch) => (StatusCode::OK, Json(ScenariosResponse::from(batch))).into_response(),
        Err(e) => pipeline_error(e),
    }
}

/// GET /api/scenarios - Return the stored batch.
pub async fn get_scenarios(State(state): State<SharedState>) -> Response {
    match state.pipeline.load_scenarios().await {
        Ok(batch) => Json(ScenariosResponse::from(batch)).into_response(),
        Err(e) => pipeline_error(e),
    }
}

pub(crate) fn pipeline_error(err: PipelineError) -> Response {
    if let PipelineError::Storage(ref e) = err {
        tracing::error!("storage failure: {}", e);
    }
    error_response(err.status_code(), err.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use http::Request;
    use qaforge_agent::{InferenceError, StubInferenceClient};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::routes::create_router;
    use crate::testing::{FakeGit, test_state};

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn generate_returns_parsed_batch() {
        let dir = TempDir::new().unwrap();
        let stub = Arc::new(StubInferenceClient::ok("- Verify play\n- Verify pause\n- Verify skip"));
        let app = create_router(test_state(dir.path(), stub, Arc::new(FakeGit::new())));

        let resp = app
            .oneshot(post_json("/api/scenarios", serde_json::json!({ "area": "Playback", "count": 2 })))
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["sentinel"], false);
        let scenarios = json["scenarios"].as_array().unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0]["id"], "TC_1");
        assert_eq!(scenarios[1]["description"], "Verify pause");
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_without_inference() {
        let dir = TempDir::new().unwrap();
        let stub = Arc::new(StubInferenceClient::ok("unused"));
        let state = test_state(dir.path(), Arc::<StubInferenceClient>::clone(&stub), Arc::new(FakeGit::new()));

        for body in [
            serde_json::json!({ "area": "", "count": 3 }),
            serde_json::json!({ "area": "Search", "count": 0 }),
            serde_json::json!({ "area": "Search", "count": -4 }),
        ] {
            let resp = create_router(Arc::clone(&state))
                .oneshot(post_json("/api/scenarios", body))
                .await
                .unwrap();
            assert_eq!(resp.status(), 400);
        }

        assert_eq!(stub.call_count(), 0);
        assert!(!state.pipeline.storage().scenarios().exists());
    }

    #[tokio::test]
    async fn inference_failure_returns_sentinel_batch() {
        let dir = TempDir::new().unwrap();
        let stub = Arc::new(StubInferenceClient::failing(InferenceError::Transport(
            "connection refused".to_string(),
        )));
        let app = create_router(test_state(dir.path(), stub, Arc::new(FakeGit::new())));

        let resp = app
            .oneshot(post_json("/api/scenarios", serde_json::json!({ "area": "Search", "count": 3 })))
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["sentinel"], true);
        assert_eq!(json["scenarios"][0]["id"], "TC_ERROR");
    }

    #[tokio::test]
    async fn get_before_generation_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = create_router(test_state(
            dir.path(),
            Arc::new(StubInferenceClient::ok("")),
            Arc::new(FakeGit::new()),
        ));

        let resp = app
            .oneshot(Request::get("/api/scenarios").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 404);
        let json = json_body(resp).await;
        assert_eq!(json["error"], "No test scenarios found.");
    }

    #[tokio::test]
    async fn storage_failure_returns_500_with_error_body() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("test_scenarios.csv")).unwrap();
        let state = test_state(
            dir.path(),
            Arc::new(StubInferenceClient::ok("Verify play")),
            Arc::new(FakeGit::new()),
        );

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json("/api/scenarios", serde_json::json!({ "area": "Playback", "count": 1 })))
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        let json = json_body(resp).await;
        assert!(json["error"].as_str().unwrap().starts_with("storage error"));

        let resp = create_router(Arc::clone(&state))
            .oneshot(Request::get("/api/scenarios").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
    }
}
