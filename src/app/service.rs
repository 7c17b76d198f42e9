//! Application service layer.
//!
//! One scrape is one fetch-populate-render cycle against a private registry.
//! Upstream failures never fail the scrape; they are logged and the counters
//! stay at zero.

use std::sync::Arc;
use std::time::Instant;

use prometheus::Registry;
use tracing::{debug, error, instrument};

use crate::domain::{
    AppError, ConstLabels, OracleFeederClient, OracleFeederError, VotePenaltyValues,
};
use crate::infra::{RenderedMetrics, VotePenaltyMetrics, encode_text};

/// Builds the Sei vote penalty metrics page for a validator.
///
/// # Example
///
/// ```ignore
/// let feeder = Arc::new(HttpOracleFeederClient::with_defaults(&api_address)?);
/// let service = SeiMetricsService::new(feeder, ConstLabels::new());
///
/// let rendered = service.scrape("seivaloper1...").await?;
/// ```
pub struct SeiMetricsService {
    oracle_feeder: Arc<dyn OracleFeederClient>,
    const_labels: ConstLabels,
}

impl SeiMetricsService {
    #[must_use]
    pub fn new(oracle_feeder: Arc<dyn OracleFeederClient>, const_labels: ConstLabels) -> Self {
        Self {
            oracle_feeder,
            const_labels,
        }
    }

    #[must_use]
    pub fn const_labels(&self) -> &ConstLabels {
        &self.const_labels
    }

    /// Renders the vote penalty counters of `address`.
    ///
    /// # Errors
    ///
    /// Only fails when the local registry cannot register or encode the
    /// counters. Upstream problems yield zero-valued counters instead.
    pub async fn scrape(&self, address: &str) -> Result<RenderedMetrics, AppError> {
        let registry = Registry::new();
        let metrics = VotePenaltyMetrics::register(&registry, &self.const_labels)?;

        let values = self.vote_penalty_values(address).await;
        metrics.record(&values);

        encode_text(&registry)
    }

    /// Queries the oracle feeder and converts the counters.
    ///
    /// Every failure is logged and collapses to all-zero values.
    #[instrument(skip(self))]
    pub async fn vote_penalty_values(&self, address: &str) -> VotePenaltyValues {
        debug!("Started querying oracle feeder metrics");
        let query_start = Instant::now();

        match self.oracle_feeder.vote_penalty_counter(address).await {
            Ok(counter) => {
                debug!(
                    request_time = query_start.elapsed().as_secs_f64(),
                    "Finished querying oracle feeder metrics"
                );
                VotePenaltyValues::from(&counter)
            }
            Err(e) => {
                error!(error = %e, "{}", failure_message(&e));
                VotePenaltyValues::default()
            }
        }
    }
}

/// Log message naming the stage that failed.
fn failure_message(err: &OracleFeederError) -> &'static str {
    match err {
        OracleFeederError::Request(_) => "Could not get oracle feeder metrics",
        OracleFeederError::Body(_) => "Could not parse oracle feeder metrics",
        OracleFeederError::Decode(_) => "Error decoding JSON",
    }
}
