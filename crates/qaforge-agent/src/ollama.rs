// ABOUTME: HTTP adapter for an Ollama-style /api/generate endpoint implementing InferenceClient.
// ABOUTME: Posts {model, prompt, stream: false} and reads the `response` field of the JSON reply.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{InferenceClient, InferenceError};

/// Request body for a non-streaming generate call.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// The part of a generate reply we use. A missing `response` reads as empty text.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Calls a configured generate endpoint with a configured model.
pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a client for `url` and `model` whose requests expire after `timeout`.
    pub fn new(url: String, model: String, timeout: Duration) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            model,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_send_error(&self, err: reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.timeout.as_secs())
        } else {
            InferenceError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::info!(url = %self.url, model = %self.model, prompt_len = prompt.len(), "sending generate request");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generate request failed");
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| InferenceError::InvalidResponse(format!("{}: {}", e, text)))?;

        tracing::info!(generated_len = parsed.response.len(), "generate request finished");
        Ok(parsed.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
