//! Error types for document comparison

use thiserror::Error;

use crate::service::llm::LlmError;

/// Error type for document comparison
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// A submitted document could not be parsed as JSON
    #[error("Invalid {which} document: {source}")]
    InvalidDocument {
        which: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The provider could not be reached or answered with an error
    #[error("Provider call failed: {0}")]
    Provider(LlmError),

    /// The provider answered, but not with parseable JSON
    #[error("Model output is not valid JSON: {0}")]
    InvalidFormat(String),
}

impl From<LlmError> for ComparisonError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingContent => ComparisonError::InvalidFormat(err.to_string()),
            other => ComparisonError::Provider(other),
        }
    }
}
