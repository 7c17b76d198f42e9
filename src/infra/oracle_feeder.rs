//! HTTP client for the Sei oracle feeder REST API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::{AppError, OracleFeederClient, OracleFeederError, VotePenaltyCounter};

/// Path segment between the base address and the validator address.
const VALIDATORS_PATH: &str = "/sei-protocol/sei-chain/oracle/validators/";

/// Configuration for the oracle feeder client
#[derive(Debug, Clone, Default)]
pub struct OracleFeederConfig {
    /// Whole-request timeout. `None` waits for the upstream indefinitely.
    pub timeout: Option<Duration>,
}

/// reqwest-backed oracle feeder client
pub struct HttpOracleFeederClient {
    http_client: Client,
    api_address: String,
}

impl HttpOracleFeederClient {
    /// Create a new oracle feeder client with custom configuration
    pub fn new(api_address: &str, config: OracleFeederConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("could not build HTTP client: {e}")))?;
        info!(
            api_address = %api_address,
            timeout = ?config.timeout,
            "Created oracle feeder client"
        );
        Ok(Self {
            http_client,
            api_address: api_address.to_string(),
        })
    }

    /// Create a new oracle feeder client with default configuration
    pub fn with_defaults(api_address: &str) -> Result<Self, AppError> {
        Self::new(api_address, OracleFeederConfig::default())
    }

    /// Upstream URL for one validator's counters. Plain concatenation.
    #[must_use]
    pub fn vote_penalty_counter_url(&self, address: &str) -> String {
        format!(
            "{}{VALIDATORS_PATH}{address}/vote_penalty_counter",
            self.api_address
        )
    }
}

#[async_trait]
impl OracleFeederClient for HttpOracleFeederClient {
    async fn vote_penalty_counter(
        &self,
        address: &str,
    ) -> Result<VotePenaltyCounter, OracleFeederError> {
        let url = self.vote_penalty_counter_url(address);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| OracleFeederError::Request(e.to_string()))?;

        // The status is deliberately not checked; error bodies fail decoding.
        debug!(status = %response.status(), url = %url, "Oracle feeder responded");

        let body = response
            .bytes()
            .await
            .map_err(|e| OracleFeederError::Body(e.to_string()))?;

        VotePenaltyCounter::from_response_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpOracleFeederClient::with_defaults("http://localhost:1317");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_with_timeout() {
        let config = OracleFeederConfig {
            timeout: Some(Duration::from_secs(5)),
        };
        let client = HttpOracleFeederClient::new("http://localhost:1317", config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_config_default_has_no_timeout() {
        assert!(OracleFeederConfig::default().timeout.is_none());
    }

    #[test]
    fn test_vote_penalty_counter_url() {
        let client = HttpOracleFeederClient::with_defaults("http://localhost:1317").unwrap();
        assert_eq!(
            client.vote_penalty_counter_url("seivaloper1abc"),
            "http://localhost:1317/sei-protocol/sei-chain/oracle/validators/seivaloper1abc/vote_penalty_counter"
        );
    }

    #[test]
    fn test_vote_penalty_counter_url_empty_address() {
        let client = HttpOracleFeederClient::with_defaults("http://localhost:1317").unwrap();
        assert_eq!(
            client.vote_penalty_counter_url(""),
            "http://localhost:1317/sei-protocol/sei-chain/oracle/validators//vote_penalty_counter"
        );
    }

    #[tokio::test]
    async fn test_invalid_base_address_is_request_error() {
        let client = HttpOracleFeederClient::with_defaults("not a url").unwrap();
        let err = client.vote_penalty_counter("seivaloper1abc").await.unwrap_err();
        assert!(matches!(err, OracleFeederError::Request(_)));
    }
}
