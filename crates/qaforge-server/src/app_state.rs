// ABOUTME: Shared application state for the qaforge HTTP server.
// ABOUTME: Wires configuration into the pipeline, editor, and publisher for prod and test use.

use std::sync::Arc;

use qaforge_agent::{InferenceClient, InferenceError, OllamaClient};
use qaforge_core::PromptBuilder;
use qaforge_store::{StorageManager, StoreError};
use thiserror::Error;

use crate::config::QaforgeConfig;
use crate::editor::Editor;
use crate::git::{GitCommand, GitRunner};
use crate::pipeline::Pipeline;
use crate::publish::Publisher;

/// Errors that can occur while assembling the application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("storage setup failed: {0}")]
    Storage(#[from] StoreError),

    #[error("inference client setup failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub config: QaforgeConfig,
    pub pipeline: Pipeline,
    pub editor: Editor,
    pub publisher: Publisher,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build state with explicit collaborators, e.g. stubs in tests.
    pub fn new(
        config: QaforgeConfig,
        inference: Arc<dyn InferenceClient>,
        git: Arc<dyn GitRunner>,
    ) -> Result<Self, StateError> {
        let storage = StorageManager::new(&config.scenario_file, &config.script_path())?;
        let editor = Editor::new(storage.script().clone());
        let publisher = Publisher::new(
            git,
            config.publish.clone(),
            storage.script().dir().to_path_buf(),
            config.script_file.clone(),
        );
        let pipeline = Pipeline::new(inference, PromptBuilder::new(config.target_app.clone()), storage);

        Ok(Self {
            config,
            pipeline,
            editor,
            publisher,
        })
    }

    /// Build state with the HTTP inference client and the system git binary.
    pub fn from_config(config: QaforgeConfig) -> Result<Self, StateError> {
        let inference = OllamaClient::new(
            config.inference_url.clone(),
            config.model.clone(),
            config.inference_timeout,
        )?;
        Self::new(config, Arc::new(inference), Arc::new(GitCommand::new()))
    }
}
