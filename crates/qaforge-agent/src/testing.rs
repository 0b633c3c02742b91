// ABOUTME: Test utilities for qaforge-agent, including a scripted stub inference client.
// ABOUTME: Used in tests to simulate model output or endpoint failures without network calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{InferenceClient, InferenceError};

/// A stub client that replays queued results and records every prompt it receives.
///
/// When the queue is exhausted the last configured result is repeated, so a
/// single-result stub can serve any number of calls.
#[derive(Debug)]
pub struct StubInferenceClient {
    results: Mutex<VecDeque<Result<String, InferenceError>>>,
    last: Mutex<Result<String, InferenceError>>,
    prompts: Mutex<Vec<String>>,
}

impl StubInferenceClient {
    /// A stub that always returns `text`.
    pub fn ok(text: &str) -> Self {
        Self::sequence(vec![Ok(text.to_owned())])
    }

    /// A stub that always fails with `err`.
    pub fn failing(err: InferenceError) -> Self {
        Self::sequence(vec![Err(err)])
    }

    /// A stub that returns `results` in order, then keeps repeating the final one.
    pub fn sequence(results: Vec<Result<String, InferenceError>>) -> Self {
        let last = results.last().cloned().unwrap_or_else(|| Ok(String::new()));
        Self {
            results: Mutex::new(results.into()),
            last: Mutex::new(last),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl InferenceClient for StubInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_owned());
        }

        let next = self.results.lock().ok().and_then(|mut q| q.pop_front());
        match next {
            Some(result) => result,
            None => self
                .last
                .lock()
                .map(|r| r.clone())
                .unwrap_or_else(|_| Ok(String::new())),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
