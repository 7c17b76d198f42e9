//! Test utilities and mock implementations.
//!
//! This module provides reusable mock implementations of domain traits
//! and router helpers for use in unit and integration tests.

pub mod mocks;
pub mod scrape;

pub use mocks::MockOracleFeederClient;
pub use scrape::{sample_value, scrape};
