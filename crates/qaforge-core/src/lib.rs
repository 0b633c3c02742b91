// ABOUTME: Core domain library for qaforge: scenario records, generation requests, and prompts.
// ABOUTME: Pure logic only; persistence lives in qaforge-store and inference in qaforge-agent.

pub mod parse;
pub mod prompt;
pub mod request;
pub mod scenario;
pub mod script;

pub use parse::parse_scenarios;
pub use prompt::PromptBuilder;
pub use request::{GenerationRequest, ValidationError};
pub use scenario::{SENTINEL_ID, ScenarioBatch, ScenarioRecord};
pub use script::{SCRIPT_FAILURE_MARKER, failure_document};
