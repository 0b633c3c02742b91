// ABOUTME: JSON handler that publishes the script to the configured git remote.
// ABOUTME: A failing git step answers with the step name and git's raw diagnostic output.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::app_state::SharedState;
use crate::publish::PublishError;

/// POST /api/publish - Commit and push the script file.
pub async fn publish(State(state): State<SharedState>) -> Response {
    match state.publisher.publish_detached().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            let details = match &e {
                PublishError::StepFailed { details, .. } => Some(details.clone()),
                _ => None,
            };
            (
                e.status_code(),
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "step": e.step(),
                    "details": details,
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use http::Request;
    use qaforge_agent::StubInferenceClient;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::routes::create_router;
    use crate::testing::{FakeGit, test_state};

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn publish_success_reports_remote_and_branch() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::new());
        let app = create_router(test_state(dir.path(), Arc::new(StubInferenceClient::ok("")), Arc::<FakeGit>::clone(&git)));

        let resp = app
            .oneshot(Request::post("/api/publish").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["branch"], "main");
        assert_eq!(json["remote_url"], "https://example.com/qa-suite.git");
        assert_eq!(json["steps"].as_array().unwrap().last().unwrap(), "push");
        assert_eq!(git.commands().last().unwrap(), "push -u origin main");
    }

    #[tokio::test]
    async fn failing_step_is_reported_as_bad_gateway() {
        let dir = TempDir::new().unwrap();
        let git = Arc::new(FakeGit::failing_on("pull"));
        let app = create_router(test_state(dir.path(), Arc::new(StubInferenceClient::ok("")), Arc::<FakeGit>::clone(&git)));

        let resp = app
            .oneshot(Request::post("/api/publish").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 502);
        let json = json_body(resp).await;
        assert_eq!(json["step"], "pull");
        assert_eq!(json["details"], "simulated failure");
        assert!(!git.commands().iter().any(|c| c.starts_with("push")));
    }
}
