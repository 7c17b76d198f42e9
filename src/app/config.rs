//! Process configuration loaded from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::{ConfigError, ConstLabels};
use crate::infra::{LogFormat, OracleFeederConfig};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9300";

/// Runtime configuration for the exporter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Base address of the oracle feeder API, used verbatim.
    pub sei_api_address: String,
    /// Labels applied to every exported metric.
    pub const_labels: ConstLabels,
    /// Opt-in upstream timeout. Unset means no timeout.
    pub upstream_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sei_api_address = lookup("SEI_API_ADDRESS")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SEI_API_ADDRESS".to_string()))?;

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("LISTEN_ADDR", e))?;

        let const_labels = match lookup("CONST_LABELS") {
            Some(raw) => ConstLabels::parse(&raw).map_err(|e| invalid("CONST_LABELS", e))?,
            None => ConstLabels::new(),
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| invalid("UPSTREAM_TIMEOUT_SECS", e))?;
                if secs == 0 {
                    return Err(invalid("UPSTREAM_TIMEOUT_SECS", "must be positive"));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| invalid("LOG_FORMAT", e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            listen_addr,
            sei_api_address,
            const_labels,
            upstream_timeout,
            log_format,
        })
    }

    #[must_use]
    pub fn oracle_feeder_config(&self) -> OracleFeederConfig {
        OracleFeederConfig {
            timeout: self.upstream_timeout,
        }
    }
}

fn invalid(key: &str, message: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
