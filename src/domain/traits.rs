//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::OracleFeederError;
use super::types::VotePenaltyCounter;

/// Oracle feeder API client trait
#[async_trait]
pub trait OracleFeederClient: Send + Sync {
    /// Fetch the vote penalty counters of one validator.
    ///
    /// `address` is used verbatim, including when empty.
    async fn vote_penalty_counter(
        &self,
        address: &str,
    ) -> Result<VotePenaltyCounter, OracleFeederError>;
}
