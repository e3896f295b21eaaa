//! Unified API error handling
//!
//! Every failure is converted to a fixed, safe message at this boundary.
//! Internal details are logged with a request id and never returned.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::comparison::ComparisonError;

pub const COMPARE_FAILED_MESSAGE: &str = "Failed to compare documents";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid response format from AI";

/// Standard error response format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request body could not be read as a compare request
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Comparison failed before or while talking to the provider
    #[error("Comparison failed: {0}")]
    Comparison(ComparisonError),

    /// Model answered with text that is not JSON
    #[error("Invalid model output: {0}")]
    InvalidFormat(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidFormat(_) => INVALID_FORMAT_MESSAGE,
            ApiError::MalformedBody(_) | ApiError::Comparison(_) => COMPARE_FAILED_MESSAGE,
            ApiError::Internal(_) => "Internal server error",
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::Comparison(ComparisonError::InvalidDocument { .. }) => "invalid_document",
            ApiError::Comparison(ComparisonError::Provider(_)) => "upstream_error",
            ApiError::Comparison(ComparisonError::InvalidFormat(_)) | ApiError::InvalidFormat(_) => {
                "invalid_format"
            }
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        tracing::error!(
            error_type = self.error_type(),
            status = status.as_u16(),
            request_id = %Uuid::new_v4(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        match err {
            ComparisonError::InvalidFormat(msg) => ApiError::InvalidFormat(msg),
            other => ApiError::Comparison(other),
        }
    }
}
