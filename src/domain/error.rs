//! Application error types with proper error chaining.

use thiserror::Error;

/// Failures while querying the oracle feeder API.
///
/// None of these reach the scraper: the metrics service logs them and
/// exposes zero-valued counters instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleFeederError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Could not read response body: {0}")]
    Body(String),
    #[error("Error decoding JSON: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Failures that can reach an HTTP response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Metrics error: {0}")]
    Metrics(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::Metrics(err.to_string())
    }
}

impl From<serde_json::Error> for OracleFeederError {
    fn from(err: serde_json::Error) -> Self {
        OracleFeederError::Decode(err.to_string())
    }
}
