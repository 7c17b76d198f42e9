//! Infrastructure layer implementations.

pub mod metrics;
pub mod observability;
pub mod oracle_feeder;

pub use metrics::{RenderedMetrics, VotePenaltyMetrics, encode_text};
pub use observability::{LogFormat, init_tracing};
pub use oracle_feeder::{HttpOracleFeederClient, OracleFeederConfig};
