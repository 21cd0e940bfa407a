use async_trait::async_trait;
use reqwest::Client as HttpClient;
use super::models::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::api::llm::{LanguageModel, LlmError};
use tracing::debug;

/// Client for a locally running Ollama server
pub struct OllamaClient {
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:11434";
    pub const DEFAULT_MODEL: &'static str = "llama3";

    /// Create a client for `model` served at `base_url`
    pub fn with_base_url(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// POST /api/generate
    ///
    /// Single non-streaming completion. The prompt is sent exactly as given.
    pub async fn generate(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };
        debug!("POST {} (model: {}, prompt: {} chars)", url, self.model, prompt.len());

        let response = self.http_client
            .post(&url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<GenerateResponse>(&text).map_err(|e| LlmError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(self.generate(prompt).await?.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, StubRoute};

    #[tokio::test]
    async fn test_complete_posts_raw_prompt() {
        let stub = spawn_stub(vec![StubRoute::json(
            "/api/generate",
            200,
            r#"{"model": "llama3", "response": "Prices look **flat**.", "done": true}"#,
        )])
        .await;
        let client = OllamaClient::with_base_url(stub.base_url(), "llama3");

        let answer = client.complete("Is BTC going up?").await.unwrap();
        assert_eq!(answer, "Prices look **flat**.");

        let requests = stub.requests("/api/generate").await;
        assert_eq!(requests.len(), 1);
        let sent: GenerateRequest = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(sent.model, "llama3");
        assert_eq!(sent.prompt, "Is BTC going up?");
        assert!(!sent.stream);
    }

    #[tokio::test]
    async fn test_missing_model_is_status_error() {
        let stub = spawn_stub(vec![StubRoute::json(
            "/api/generate",
            404,
            r#"{"error": "model \"mistral\" not found, try pulling it first"}"#,
        )])
        .await;
        let client = OllamaClient::with_base_url(stub.base_url(), "mistral");

        match client.complete("hi").await.unwrap_err() {
            LlmError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
