//! Request-scoped Prometheus metrics.
//!
//! Every scrape builds its own [`Registry`] and registers a fresh
//! [`VotePenaltyMetrics`] into it, so concurrent scrapes never share
//! collectors and never collide on registration.

use prometheus::{Counter, Encoder, Opts, Registry, TextEncoder};

use crate::domain::{AppError, ConstLabels, VotePenaltyValues};

/// The three vote penalty counters of one scrape.
#[derive(Clone)]
pub struct VotePenaltyMetrics {
    pub miss_count: Counter,
    pub abstain_count: Counter,
    pub success_count: Counter,
}

impl VotePenaltyMetrics {
    /// Creates the counters and registers them into `registry`.
    pub fn register(
        registry: &Registry,
        const_labels: &ConstLabels,
    ) -> Result<Self, prometheus::Error> {
        let miss_count = counter(
            registry,
            const_labels,
            "vote_penalty_miss_count",
            "Vote penalty miss count",
        )?;
        let abstain_count = counter(
            registry,
            const_labels,
            "vote_penalty_abstain_count",
            "Vote penalty abstain count",
        )?;
        let success_count = counter(
            registry,
            const_labels,
            "vote_penalty_success_count",
            "Vote penalty success count",
        )?;

        Ok(Self {
            miss_count,
            abstain_count,
            success_count,
        })
    }

    /// Adds the converted magnitudes onto the counters.
    pub fn record(&self, values: &VotePenaltyValues) {
        self.miss_count.inc_by(values.miss);
        self.abstain_count.inc_by(values.abstain);
        self.success_count.inc_by(values.success);
    }
}

fn counter(
    registry: &Registry,
    const_labels: &ConstLabels,
    name: &str,
    help: &str,
) -> Result<Counter, prometheus::Error> {
    let counter =
        Counter::with_opts(Opts::new(name, help).const_labels(const_labels.to_hash_map()))?;
    registry.register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Text exposition of a registry along with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMetrics {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Encodes everything in `registry` in the Prometheus text format.
pub fn encode_text(registry: &Registry) -> Result<RenderedMetrics, AppError> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut body = Vec::new();
    encoder.encode(&metric_families, &mut body)?;
    Ok(RenderedMetrics {
        content_type: encoder.format_type().to_string(),
        body,
    })
}
