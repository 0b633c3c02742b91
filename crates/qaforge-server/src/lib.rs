// ABOUTME: HTTP server for qaforge: scenario/script pipeline, editor, and git publishing.
// ABOUTME: Serves an Askama web UI and a JSON API over shared state built from QaforgeConfig.

pub mod api;
pub mod app_state;
mod blocking;
pub mod config;
pub mod editor;
pub mod git;
pub mod pipeline;
pub mod publish;
pub mod routes;
pub mod testing;
pub mod web;

pub use app_state::{AppState, SharedState, StateError};
pub use config::{ConfigError, PublishConfig, QaforgeConfig};
pub use pipeline::{Pipeline, PipelineError};
pub use publish::{PublishError, PublishReport, PublishStep, Publisher};
pub use routes::create_router;
