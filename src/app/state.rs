//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::{ConstLabels, OracleFeederClient};

use super::service::SeiMetricsService;

/// Shared application state for the Axum web server.
///
/// Everything in here is read-only after startup. Per-scrape state (the
/// registry and its counters) lives in the request, never in `AppState`.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// let feeder = Arc::new(HttpOracleFeederClient::with_defaults(&api_address)?);
/// let state = AppState::new(feeder, ConstLabels::new());
///
/// let router = create_router(Arc::new(state));
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The metrics service that queries the oracle feeder.
    pub service: Arc<SeiMetricsService>,
}

impl AppState {
    /// Creates a new `AppState`, wiring the service to the given client.
    #[must_use]
    pub fn new(oracle_feeder: Arc<dyn OracleFeederClient>, const_labels: ConstLabels) -> Self {
        let service = Arc::new(SeiMetricsService::new(oracle_feeder, const_labels));
        Self { service }
    }

    /// Creates a new `AppState` with a custom service.
    #[must_use]
    pub fn with_service(service: Arc<SeiMetricsService>) -> Self {
        Self { service }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockOracleFeederClient;

    #[test]
    fn test_app_state_creation() {
        let feeder = Arc::new(MockOracleFeederClient::new());
        let labels = ConstLabels::new().with("network", "testnet");

        let state = AppState::new(feeder, labels);

        assert_eq!(state.service.const_labels().get("network"), Some("testnet"));
    }

    #[test]
    fn test_app_state_with_service() {
        let feeder = Arc::new(MockOracleFeederClient::new());
        let service = Arc::new(SeiMetricsService::new(feeder, ConstLabels::new()));

        let state = AppState::with_service(Arc::clone(&service));

        assert!(Arc::ptr_eq(&state.service, &service));
    }

    #[test]
    fn test_app_state_is_clone() {
        let feeder = Arc::new(MockOracleFeederClient::new());
        let state = AppState::new(feeder, ConstLabels::new());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.service, &cloned.service));
    }
}
