//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of domain traits
//! that can be configured to simulate various scenarios including
//! success, failure, and edge cases.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::{OracleFeederClient, OracleFeederError, VotePenaltyCounter};

/// Canned upstream behaviour for one address.
#[derive(Debug, Clone)]
enum MockResponse {
    /// Raw response body, decoded like a real upstream body.
    Body(Vec<u8>),
    /// Transport-level failure.
    Failure(String),
}

/// Mock oracle feeder client for testing.
///
/// Responses are configured per validator address. Addresses without a
/// configured response fail with a request error, or with the message
/// given to [`MockOracleFeederClient::failing`].
///
/// # Example
///
/// ```
/// use sei_oracle_exporter::domain::VotePenaltyCounter;
/// use sei_oracle_exporter::test_utils::MockOracleFeederClient;
///
/// let mock = MockOracleFeederClient::new()
///     .with_counter("seivaloper1a", VotePenaltyCounter::new("5", "2", "100"))
///     .with_body("seivaloper1b", "not json");
///
/// let failing_mock = MockOracleFeederClient::failing("connection refused");
/// ```
pub struct MockOracleFeederClient {
    responses: HashMap<String, MockResponse>,
    fallback: MockResponse,
    latency: Option<Duration>,
    call_count: AtomicU64,
    requested: Mutex<Vec<String>>,
}

impl MockOracleFeederClient {
    /// Creates a mock with no configured responses.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: MockResponse::Failure("no mock response configured".to_string()),
            latency: None,
            call_count: AtomicU64::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock whose every request fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.fallback = MockResponse::Failure(message.into());
        mock
    }

    /// Serves `counter` for `address` in the upstream JSON shape.
    #[must_use]
    pub fn with_counter(self, address: impl Into<String>, counter: VotePenaltyCounter) -> Self {
        let body = counter.to_response_body().to_string();
        self.with_body(address, body)
    }

    /// Serves a raw body for `address`.
    #[must_use]
    pub fn with_body(mut self, address: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(address.into(), MockResponse::Body(body.into()));
        self
    }

    /// Fails requests for `address` only.
    #[must_use]
    pub fn with_failure(mut self, address: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .insert(address.into(), MockResponse::Failure(message.into()));
        self
    }

    /// Adds simulated latency to every request.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Gets the number of upstream requests made.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Addresses requested so far, in call order.
    pub fn requested_addresses(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Default for MockOracleFeederClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OracleFeederClient for MockOracleFeederClient {
    async fn vote_penalty_counter(
        &self,
        address: &str,
    ) -> Result<VotePenaltyCounter, OracleFeederError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requested.lock().unwrap().push(address.to_string());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.responses.get(address).unwrap_or(&self.fallback) {
            MockResponse::Body(body) => VotePenaltyCounter::from_response_body(body),
            MockResponse::Failure(message) => Err(OracleFeederError::Request(message.clone())),
        }
    }
}
