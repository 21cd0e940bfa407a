use tracing::info;
use crate::api::llm::{LanguageModel, LlmError};

/// Forward the user's question to the language model, verbatim.
///
/// An empty question makes no model call and yields `None`. Only the question
/// is sent: no price or trend data is attached, despite the input label.
pub async fn forward(model: &dyn LanguageModel, question: &str) -> Result<Option<String>, LlmError> {
    if question.is_empty() {
        return Ok(None);
    }

    info!("🤖 Asking {} ({} chars)", model.model_name(), question.chars().count());
    let answer = model.complete(question).await?;
    Ok(Some(answer))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use async_trait::async_trait;

    /// Records prompts and answers with a fixed string
    pub struct FakeModel {
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
        pub answer: String,
    }

    impl FakeModel {
        pub fn answering(answer: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                answer: answer.to_string(),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LanguageModel for FakeModel {
        fn model_name(&self) -> &str {
            "fake"
        }

        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.answer.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_question_skips_model() {
        let model = FakeModel::answering("unused");
        assert_eq!(forward(&model, "").await.unwrap(), None);
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_question_sent_verbatim() {
        let model = FakeModel::answering("Markets are volatile.");
        let answer = forward(&model, "  why is SOL down?  ").await.unwrap();

        assert_eq!(answer.as_deref(), Some("Markets are volatile."));
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.prompts.lock().unwrap()[0], "  why is SOL down?  ");
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        // nothing listens on port 1
        let model = crate::api::ollama::OllamaClient::with_base_url("http://127.0.0.1:1", "llama3");
        let err = forward(&model, "hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Request(_)));
    }
}
