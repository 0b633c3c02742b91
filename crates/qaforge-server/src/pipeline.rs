// ABOUTME: Orchestrates scenario and script generation across prompts, inference, and the stores.
// ABOUTME: Inference failures become persisted sentinels; only validation and storage errors escape.

use std::sync::Arc;

use axum::http::StatusCode;
use qaforge_agent::InferenceClient;
use qaforge_core::{GenerationRequest, PromptBuilder, ScenarioBatch, ValidationError, failure_document, parse_scenarios};
use qaforge_store::{StorageManager, StoreError};
use thiserror::Error;

use crate::blocking::run_blocking;

/// Errors surfaced to callers of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No test scenarios found.")]
    NoScenarios,

    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            PipelineError::NoScenarios
        } else {
            PipelineError::Storage(err)
        }
    }
}

impl PipelineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
            PipelineError::NoScenarios => StatusCode::NOT_FOUND,
            PipelineError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result of a script generation pass.
#[derive(Debug, Clone)]
pub struct ScriptOutcome {
    pub content: String,
    /// True when the stored document is a failure sentinel.
    pub failed: bool,
}

/// The generate → persist → regenerate pipeline.
pub struct Pipeline {
    inference: Arc<dyn InferenceClient>,
    prompts: PromptBuilder,
    storage: StorageManager,
}

impl Pipeline {
    pub fn new(inference: Arc<dyn InferenceClient>, prompts: PromptBuilder, storage: StorageManager) -> Self {
        Self {
            inference,
            prompts,
            storage,
        }
    }

    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    /// The stored batch, or `NoScenarios` when none has been generated.
    pub async fn load_scenarios(&self) -> Result<ScenarioBatch, PipelineError> {
        let store = self.storage.scenarios().clone();
        Ok(run_blocking(move || store.load()).await?)
    }

    /// Generate and persist a fresh batch for `request`, replacing any prior batch.
    ///
    /// An inference failure yields and persists the `TC_ERROR` sentinel batch.
    pub async fn generate_scenarios(&self, request: &GenerationRequest) -> Result<ScenarioBatch, PipelineError> {
        let prompt = self.prompts.scenario_prompt(&request.area, request.count);

        let batch = match self.inference.generate(&prompt).await {
            Ok(text) => parse_scenarios(&request.area, &text, request.count as usize),
            Err(e) => {
                tracing::warn!(area = %request.area, error = %e, "scenario generation failed; storing sentinel");
                ScenarioBatch::sentinel(&request.area, &e.to_string())
            }
        };

        let store = self.storage.scenarios().clone();
        let saved = batch.clone();
        run_blocking(move || store.save(&saved)).await?;
        tracing::info!(area = %request.area, records = batch.len(), sentinel = batch.is_sentinel(), "scenario batch generated");
        Ok(batch)
    }

    /// Generate and persist the automation script from the stored batch.
    ///
    /// Fails with `NoScenarios`, writing nothing, when no batch has been stored.
    pub async fn generate_script(&self) -> Result<ScriptOutcome, PipelineError> {
        let batch = self.load_scenarios().await?;
        let prompt = self.prompts.script_prompt(&batch);

        let outcome = match self.inference.generate(&prompt).await {
            Ok(content) => ScriptOutcome { content, failed: false },
            Err(e) => {
                tracing::warn!(error = %e, "script generation failed; storing failure document");
                ScriptOutcome {
                    content: failure_document(&e.to_string()),
                    failed: true,
                }
            }
        };

        let store = self.storage.script().clone();
        let content = outcome.content.clone();
        run_blocking(move || store.save(&content)).await?;
        tracing::info!(records = batch.len(), failed = outcome.failed, "script generated");
        Ok(outcome)
    }
}
