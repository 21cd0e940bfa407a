//! Prompt-in, text-out seam for the insight feature
//!
//! Rendering only talks to `LanguageModel`, so the inference backend can be
//! swapped without touching the dashboard.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse model response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Name of the model answering the prompt
    fn model_name(&self) -> &str;

    /// Submit one prompt and wait for the whole completion
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
