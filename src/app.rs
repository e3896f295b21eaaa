//! Application state and service initialization
//!
//! Builds the service graph from [`Config`]. The provider credential is read
//! once here and handed to the client; request handling never touches the
//! process environment.

use std::sync::Arc;

use actix_web::web;

use crate::model::Config;
use crate::service::{ComparisonService, CompletionProvider, OpenAiClient};

/// Application state shared by all workers
#[derive(Clone)]
pub struct AppState {
    pub comparison_service: web::Data<ComparisonService>,
}

impl AppState {
    /// Initialize the production service graph
    ///
    /// Fails if `OPENAI_API_KEY` is missing or the provider base URL is invalid.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or(AppError::MissingConfig("OPENAI_API_KEY"))?;

        let client = OpenAiClient::new(api_key, &config.provider)
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        tracing::info!(endpoint = %client.endpoint(), "Chat completion provider configured");

        Ok(Self::with_provider(Arc::new(client), config))
    }

    /// Build state around an arbitrary completion provider
    pub fn with_provider(provider: Arc<dyn CompletionProvider>, config: &Config) -> Self {
        Self {
            comparison_service: web::Data::new(ComparisonService::new(
                provider,
                &config.provider,
            )),
        }
    }

    /// Register shared data and routes on an actix app
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.comparison_service.clone())
            .configure(crate::api::configure);
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
