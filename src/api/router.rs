//! HTTP routing configuration.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::app::AppState;

use super::handlers::{SEI_METRICS_PATH, health_handler, sei_metrics_handler};

/// Create the exporter router.
///
/// No request timeout is layered on: a scrape waits for the upstream as
/// long as the oracle feeder client allows.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let middleware = ServiceBuilder::new().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
    );

    Router::new()
        .route(SEI_METRICS_PATH, get(sei_metrics_handler))
        .route("/health", get(health_handler))
        .layer(middleware)
        .with_state(app_state)
}
