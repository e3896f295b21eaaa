//! HTTP transport to the compare endpoint

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::model::{CompareRequest, ComparisonReport};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to compare documents: server returned {status}")]
    Status { status: u16 },

    #[error("Failed to decode comparison report: {0}")]
    Decode(String),
}

/// Sends a comparison request and decodes the report
#[async_trait]
pub trait CompareTransport: Send + Sync {
    async fn compare(&self, request: &CompareRequest) -> Result<ComparisonReport, ClientError>;
}

/// Posts to `{server}/api/compare`
pub struct HttpCompareClient {
    client: Client,
    endpoint: Url,
}

impl HttpCompareClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(server)
            .and_then(|base| base.join("/api/compare"))
            .map_err(|e| ClientError::InvalidUrl(format!("{server}: {e}")))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CompareTransport for HttpCompareClient {
    async fn compare(&self, request: &CompareRequest) -> Result<ComparisonReport, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting documents for comparison");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<ComparisonReport>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_server_url() {
        let client = HttpCompareClient::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8080/api/compare");
    }

    #[test]
    fn test_invalid_server_url() {
        assert!(matches!(
            HttpCompareClient::new("localhost"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
