// ABOUTME: Defines the InferenceClient trait every text-generation backend implements.
// ABOUTME: Also defines InferenceError, the tagged failure callers turn into visible sentinels.

use async_trait::async_trait;

/// Errors that can occur during a single generation round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("inference endpoint unreachable: {0}")]
    Transport(String),

    #[error("inference request timed out after {0}s")]
    Timeout(u64),

    #[error("inference endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid inference response: {0}")]
    InvalidResponse(String),
}

/// A text-generation backend. Implementations perform exactly one request per call.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Send `prompt` and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;

    /// Model identifier used for logging and display.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_body() {
        let err = InferenceError::Status {
            status: 404,
            body: "{\"error\":\"model 'x' not found\"}".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("model 'x' not found"));
    }

    #[test]
    fn timeout_mentions_duration() {
        assert_eq!(
            InferenceError::Timeout(30).to_string(),
            "inference request timed out after 30s"
        );
    }
}
