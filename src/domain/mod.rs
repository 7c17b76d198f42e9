//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, ConfigError, OracleFeederError};
pub use traits::OracleFeederClient;
pub use types::{
    ConstLabels, ErrorDetail, ErrorResponse, HealthResponse, VOTE_PENALTY_COUNTER_KEY,
    VotePenaltyCounter, VotePenaltyValues, parse_magnitude,
};
