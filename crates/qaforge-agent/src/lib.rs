// ABOUTME: Inference layer for qaforge: a text-generation client trait and its HTTP adapter.
// ABOUTME: Each call is a single non-streaming round trip; retries belong to callers.

pub mod client;
pub mod ollama;
pub mod testing;

pub use client::{InferenceClient, InferenceError};
pub use ollama::OllamaClient;
pub use testing::StubInferenceClient;
