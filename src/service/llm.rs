//! Chat-completion provider abstraction
//!
//! The comparison service only needs "send a prompt, get raw text back".
//! [`CompletionProvider`] captures that capability so tests can inject a
//! deterministic stub; [`OpenAiClient`] talks to an OpenAI-compatible API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ProviderConfig;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Invalid provider base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Response body is not a chat-completion envelope
    #[error("Failed to parse provider response: {0}")]
    ParseError(String),

    /// Envelope decoded but carries no completion text
    #[error("Provider response has no completion content")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of a `/chat/completions` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::MissingContent)
    }
}

/// Anything that can turn a chat request into raw completion text
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue a single, non-streaming completion and return the first choice's text
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// Client for OpenAI-compatible chat-completion APIs
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client for the configured provider
    ///
    /// The API key is passed in explicitly; the client never reads process
    /// environment on its own.
    pub fn new(api_key: impl Into<String>, config: &ProviderConfig) -> Result<Self, LlmError> {
        let endpoint = completions_endpoint(&config.base_url)?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        envelope.into_content()
    }
}

/// Append `/chat/completions` to a base URL, keeping any path prefix such as `/v1`
fn completions_endpoint(base_url: &str) -> Result<Url, LlmError> {
    let normalized = format!("{}/", base_url.trim_end_matches('/'));
    let base =
        Url::parse(&normalized).map_err(|e| LlmError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    base.join("chat/completions")
        .map_err(|e| LlmError::InvalidBaseUrl(format!("{base_url}: {e}")))
}
