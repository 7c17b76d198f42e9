//! Application layer containing configuration, business logic and shared state.

pub mod config;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use service::SeiMetricsService;
pub use state::AppState;
