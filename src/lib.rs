//! Sei Oracle Exporter
//!
//! Republishes a Sei validator's oracle vote penalty counters as Prometheus
//! metrics, fetched from the oracle feeder API on every scrape.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │     /metrics/sei and /health, tracing        │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │  config, state, fetch-populate-render cycle  │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │    payload types, errors, client trait       │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │ reqwest client, per-request registry, logs   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Each scrape of `/metrics/sei?address=...` builds a private
//! `prometheus::Registry`, queries
//! `{api}/sei-protocol/sei-chain/oracle/validators/{address}/vote_penalty_counter`
//! once, and renders `vote_penalty_miss_count`, `vote_penalty_abstain_count`
//! and `vote_penalty_success_count`. Upstream failures are logged and leave
//! the counters at zero; the scrape itself always succeeds.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sei_oracle_exporter::api::create_router;
//! use sei_oracle_exporter::app::AppState;
//! use sei_oracle_exporter::domain::ConstLabels;
//! use sei_oracle_exporter::infra::HttpOracleFeederClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let feeder = Arc::new(HttpOracleFeederClient::with_defaults("http://localhost:1317")?);
//!     let state = Arc::new(AppState::new(feeder, ConstLabels::new()));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:9300").await?;
//!     axum::serve(listener, create_router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
