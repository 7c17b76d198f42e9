use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ConfigError, OracleFeederError};

/// Key under which the oracle feeder nests the counter record.
pub const VOTE_PENALTY_COUNTER_KEY: &str = "vote_penalty_counter";

/// Vote penalty counters as reported by the oracle feeder.
///
/// The upstream encodes every count as a decimal string. Missing and `null`
/// fields decode to an empty string, which later converts to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VotePenaltyCounter {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub miss_count: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub abstain_count: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub success_count: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl VotePenaltyCounter {
    pub fn new(
        miss_count: impl Into<String>,
        abstain_count: impl Into<String>,
        success_count: impl Into<String>,
    ) -> Self {
        Self {
            miss_count: miss_count.into(),
            abstain_count: abstain_count.into(),
            success_count: success_count.into(),
        }
    }

    /// Decodes an oracle feeder response body.
    ///
    /// The body must be a JSON object whose values are counter records or
    /// `null`. An absent or `null` `vote_penalty_counter` yields the default
    /// (all-empty) record rather than an error.
    pub fn from_response_body(body: &[u8]) -> Result<Self, OracleFeederError> {
        let mut data: HashMap<String, Option<VotePenaltyCounter>> =
            serde_json::from_slice(body)?;
        Ok(data
            .remove(VOTE_PENALTY_COUNTER_KEY)
            .flatten()
            .unwrap_or_default())
    }

    /// Wraps the record the way the oracle feeder serves it.
    pub fn to_response_body(&self) -> serde_json::Value {
        serde_json::json!({ VOTE_PENALTY_COUNTER_KEY: self })
    }
}

/// Converted counter magnitudes, ready to be added onto counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VotePenaltyValues {
    pub miss: f64,
    pub abstain: f64,
    pub success: f64,
}

impl From<&VotePenaltyCounter> for VotePenaltyValues {
    fn from(counter: &VotePenaltyCounter) -> Self {
        Self {
            miss: parse_magnitude(&counter.miss_count),
            abstain: parse_magnitude(&counter.abstain_count),
            success: parse_magnitude(&counter.success_count),
        }
    }
}

/// Parses a decimal count, falling back to zero.
///
/// Anything a counter cannot accept (unparseable, negative, NaN or infinite)
/// is zero. NaN and infinities are rejected on purpose even though they parse,
/// so a counter never exports them.
pub fn parse_magnitude(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Constant labels applied to every exported metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstLabels(BTreeMap<String, String>);

impl ConstLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name=value` pairs separated by commas.
    ///
    /// Empty entries are skipped. Label names follow the Prometheus data
    /// model and may not be reserved (`__` prefix) or repeated.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut labels = BTreeMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = entry.split_once('=').ok_or_else(|| {
                ConfigError::ParseError(format!("expected name=value, got '{entry}'"))
            })?;
            let name = name.trim();
            if !is_valid_label_name(name) {
                return Err(ConfigError::ParseError(format!(
                    "invalid label name '{name}'"
                )));
            }
            if labels
                .insert(name.to_string(), value.trim().to_string())
                .is_some()
            {
                return Err(ConfigError::ParseError(format!(
                    "duplicate label name '{name}'"
                )));
            }
        }
        Ok(Self(labels))
    }

    /// Adds a label, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The map shape `prometheus::Opts::const_labels` expects.
    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with("__")
}

/// Error detail returned in API error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub r#type: String,
    pub message: String,
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Liveness response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
