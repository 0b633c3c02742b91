// ABOUTME: Web UI route handlers serving HTML via Askama templates.
// ABOUTME: Form-driven flow: generate scenarios → regenerate script → edit → push to git.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use qaforge_core::{GenerationRequest, ScenarioRecord};
use serde::Deserialize;

use crate::app_state::SharedState;
use crate::pipeline::PipelineError;
use crate::publish::PublishError;

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;

/// Generation form page.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub target_app: String,
    pub error: Option<String>,
    pub area: String,
    pub count: String,
}

/// Plain message page for "nothing to show yet" and failures.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub title: String,
    pub message: String,
}

/// Current scenario batch as a table.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "scenarios.html")]
pub struct ScenariosTemplate {
    pub records: Vec<ScenarioRecord>,
    pub sentinel: bool,
}

/// Script editor page.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "editor.html")]
pub struct EditorTemplate {
    pub script_name: String,
    pub content: String,
}

/// Outcome of a publish.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "publish.html")]
pub struct PublishTemplate {
    pub ok: bool,
    pub remote_url: String,
    pub branch: String,
    pub step: Option<String>,
    pub details: String,
}

fn message(status: StatusCode, title: &str, text: impl Into<String>) -> Response {
    (
        status,
        MessageTemplate {
            title: title.to_string(),
            message: text.into(),
        },
    )
        .into_response()
}

fn pipeline_failure(err: PipelineError) -> Response {
    match err {
        PipelineError::NoScenarios => message(StatusCode::NOT_FOUND, "Nothing to show yet", err.to_string()),
        other => {
            tracing::error!("pipeline failure: {}", other);
            message(other.status_code(), "Something went wrong", other.to_string())
        }
    }
}

/// GET / - Render the generation form.
pub async fn index(State(state): State<SharedState>) -> IndexTemplate {
    IndexTemplate {
        target_app: state.config.target_app.clone(),
        error: None,
        area: String::new(),
        count: String::new(),
    }
}

/// Form data for generating scenarios. `count` arrives as text.
#[derive(Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub count: String,
}

/// POST / - Generate scenarios, then continue to script generation.
pub async fn generate_scenarios(State(state): State<SharedState>, Form(form): Form<GenerateForm>) -> Response {
    let request = match GenerationRequest::from_form(&form.area, &form.count) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                IndexTemplate {
                    target_app: state.config.target_app.clone(),
                    error: Some(e.to_string()),
                    area: form.area,
                    count: form.count,
                },
            )
                .into_response();
        }
    };

    match state.pipeline.generate_scenarios(&request).await {
        Ok(_) => Redirect::to("/generate-scripts").into_response(),
        Err(e) => pipeline_failure(e),
    }
}

/// GET /generate-scripts - Regenerate the script from stored scenarios, then open the editor.
pub async fn generate_script(State(state): State<SharedState>) -> Response {
    match state.pipeline.generate_script().await {
        Ok(_) => Redirect::to("/edit-combined-script").into_response(),
        Err(e) => pipeline_failure(e),
    }
}

/// GET /edit-combined-script - Show the script for editing.
pub async fn edit_script(State(state): State<SharedState>) -> Response {
    match state.editor.get_content().await {
        Ok(content) => EditorTemplate {
            script_name: state.editor.script_name(),
            content,
        }
        .into_response(),
        Err(e) => {
            tracing::error!("failed to read script: {}", e);
            message(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong", e.to_string())
        }
    }
}

/// Form data for saving the script.
#[derive(Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub content: String,
}

/// POST /edit-combined-script - Save the edited script and reload the editor.
pub async fn save_script(State(state): State<SharedState>, Form(form): Form<EditForm>) -> Response {
    match state.editor.set_content(form.content).await {
        Ok(()) => Redirect::to("/edit-combined-script").into_response(),
        Err(e) => {
            tracing::error!("failed to save script: {}", e);
            message(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong", e.to_string())
        }
    }
}

/// GET /scenarios - Show the stored scenario batch.
pub async fn scenarios(State(state): State<SharedState>) -> Response {
    match state.pipeline.load_scenarios().await {
        Ok(batch) => ScenariosTemplate {
            sentinel: batch.is_sentinel(),
            records: batch.into_records(),
        }
        .into_response(),
        Err(e) => pipeline_failure(e),
    }
}

/// GET /push-to-git - Publish the script and show the outcome.
pub async fn push_to_git(State(state): State<SharedState>) -> Response {
    let publish = state.publisher.config();
    let remote_url = publish.remote_url.clone().unwrap_or_default();
    let branch = publish.branch.clone();

    match state.publisher.publish_detached().await {
        Ok(report) => PublishTemplate {
            ok: true,
            remote_url: report.remote_url,
            branch: report.branch,
            step: None,
            details: String::new(),
        }
        .into_response(),
        Err(e) => {
            let details = match &e {
                PublishError::StepFailed { command, details, .. } => format!("{}\n{}", command, details),
                other => other.to_string(),
            };
            (
                e.status_code(),
                PublishTemplate {
                    ok: false,
                    remote_url,
                    branch,
                    step: e.step().map(|s| s.to_string()),
                    details,
                },
            )
                .into_response()
        }
    }
}
