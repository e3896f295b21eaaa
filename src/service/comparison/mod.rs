//! Document comparison service
//!
//! Normalizes both documents, asks the completion provider for a list of
//! discrepancies and returns the model's JSON answer untouched.

use std::sync::Arc;

use serde_json::Value;

use crate::model::{CompareRequest, ProviderConfig};
use crate::service::comparison::prompts::{COMPARISON_SYSTEM_PROMPT, build_comparison_prompt};
use crate::service::llm::{ChatMessage, ChatRequest, CompletionProvider};

pub mod error;
pub mod prompts;

pub use error::ComparisonError;

/// Stateless relay between the compare endpoint and the completion provider
pub struct ComparisonService {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    temperature: f32,
}

impl ComparisonService {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &ProviderConfig) -> Self {
        tracing::info!(
            model = %config.model,
            temperature = config.temperature,
            "Comparison service initialized"
        );

        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Build the two-message chat request for a pair of normalized documents
    pub fn build_request(&self, source: &Value, case_report: &Value) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(COMPARISON_SYSTEM_PROMPT),
                ChatMessage::user(build_comparison_prompt(source, case_report)),
            ],
            temperature: self.temperature,
        }
    }

    /// Compare a source document against a case report form
    ///
    /// Makes at most one provider call. The returned value is whatever JSON
    /// the model produced; its shape is not validated.
    pub async fn compare(&self, request: CompareRequest) -> Result<Value, ComparisonError> {
        let source = request
            .source_doc
            .into_value()
            .map_err(|source| ComparisonError::InvalidDocument {
                which: "source",
                source,
            })?;
        let case_report =
            request
                .case_report
                .into_value()
                .map_err(|source| ComparisonError::InvalidDocument {
                    which: "case report",
                    source,
                })?;

        let chat_request = self.build_request(&source, &case_report);
        let prompt_length = chat_request
            .messages
            .last()
            .map(|m| m.content.len())
            .unwrap_or_default();

        let start_time = std::time::Instant::now();
        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            "Initiating chat completion for document comparison"
        );

        let content = match self.provider.complete(&chat_request).await {
            Ok(content) => {
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    "Chat completion for document comparison completed"
                );
                content
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Chat completion for document comparison failed"
                );
                return Err(e.into());
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            tracing::error!(error = %e, content_length = content.len(), "Error parsing model response");
            ComparisonError::InvalidFormat(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentInput;
    use crate::service::llm::{LlmError, Role};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed result
    struct StubProvider {
        reply: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl StubProvider {
        fn new(reply: impl Fn() -> Result<String, LlmError> + Send + Sync + 'static) -> Arc<Self> {
            Arc::new(Self {
                reply: Box::new(reply),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<ChatRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    fn service(provider: Arc<StubProvider>) -> ComparisonService {
        ComparisonService::new(provider, &ProviderConfig::default())
    }

    fn date_request() -> CompareRequest {
        CompareRequest {
            source_doc: DocumentInput::RawText("{\"date\": \"2024-01-01\"}".to_string()),
            case_report: DocumentInput::RawText("{\"date\": \"2024-01-02\"}".to_string()),
        }
    }

    const DATE_ANSWER: &str = r#"{"discrepancies":[{"field":"date","source":"2024-01-01","caseReport":"2024-01-02","type":"mismatch"}]}"#;

    #[tokio::test]
    async fn test_returns_model_json() {
        let provider = StubProvider::new(|| Ok(DATE_ANSWER.to_string()));
        let result = service(provider.clone()).compare(date_request()).await.unwrap();

        assert_eq!(result, serde_json::from_str::<Value>(DATE_ANSWER).unwrap());
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let provider = StubProvider::new(|| Ok("{}".to_string()));
        service(provider.clone()).compare(date_request()).await.unwrap();

        let calls = provider.calls();
        let request = &calls[0];
        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, COMPARISON_SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains("{\n  \"date\": \"2024-01-01\"\n}"));
        assert!(request.messages[1].content.contains("{\n  \"date\": \"2024-01-02\"\n}"));
    }

    #[tokio::test]
    async fn test_structured_and_raw_inputs_build_same_prompt() {
        let provider = StubProvider::new(|| Ok("{}".to_string()));
        let svc = service(provider.clone());

        svc.compare(date_request()).await.unwrap();
        svc.compare(CompareRequest {
            source_doc: DocumentInput::Structured(json!({"date": "2024-01-01"})),
            case_report: DocumentInput::Structured(json!({"date": "2024-01-02"})),
        })
        .await
        .unwrap();

        let calls = provider.calls();
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_invalid_document_skips_provider() {
        let provider = StubProvider::new(|| Ok("{}".to_string()));
        let result = service(provider.clone())
            .compare(CompareRequest {
                source_doc: DocumentInput::Structured(json!({})),
                case_report: DocumentInput::RawText("Error parsing JSON file".to_string()),
            })
            .await;

        assert!(matches!(
            result,
            Err(ComparisonError::InvalidDocument {
                which: "case report",
                ..
            })
        ));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let provider = StubProvider::new(|| {
            Err(LlmError::Upstream {
                status: 429,
                body: "rate limited".to_string(),
            })
        });
        let result = service(provider).compare(date_request()).await;

        assert!(matches!(
            result,
            Err(ComparisonError::Provider(LlmError::Upstream { status: 429, .. }))
        ));
    }

    #[tokio::test]
    async fn test_non_json_completion() {
        let provider =
            StubProvider::new(|| Ok("Here are the discrepancies: date differs.".to_string()));
        let result = service(provider).compare(date_request()).await;

        assert!(matches!(result, Err(ComparisonError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_content_is_invalid_format() {
        let provider = StubProvider::new(|| Err(LlmError::MissingContent));
        let result = service(provider).compare(date_request()).await;

        assert!(matches!(result, Err(ComparisonError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_repeated_comparison_is_identical() {
        let provider = StubProvider::new(|| Ok(DATE_ANSWER.to_string()));
        let svc = service(provider);

        let first = svc.compare(date_request()).await.unwrap();
        let second = svc.compare(date_request()).await.unwrap();
        assert_eq!(first, second);
    }
}
