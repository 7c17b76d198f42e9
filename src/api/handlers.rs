//! HTTP request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::app::AppState;
use crate::domain::{AppError, ErrorDetail, ErrorResponse, HealthResponse};

/// Route of the Sei vote penalty metrics.
pub const SEI_METRICS_PATH: &str = "/metrics/sei";

/// Serve the vote penalty counters of the validator named by `?address=`.
///
/// Always answers 200 with a Prometheus text page; upstream problems show
/// up as zero-valued counters and in the logs.
pub async fn sei_metrics_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let request_start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let address = address_from_uri(&uri);

    let span = info_span!("sei_metrics", request_id = %request_id);
    async move {
        let result = state.service.scrape(&address).await;

        info!(
            method = "GET",
            endpoint = SEI_METRICS_PATH,
            request_time = request_start.elapsed().as_secs_f64(),
            "Request processed"
        );

        let rendered = result?;
        Ok::<_, AppError>(
            ([(header::CONTENT_TYPE, rendered.content_type)], rendered.body).into_response(),
        )
    }
    .instrument(span)
    .await
}

/// First `address` query parameter, or empty.
///
/// A malformed query string counts as no parameter.
pub fn address_from_uri(uri: &Uri) -> String {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "address"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Liveness check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_type) = match &self {
            AppError::Metrics(_) => (StatusCode::INTERNAL_SERVER_ERROR, "metrics_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(error_type = %error_type, message = %message, "Server error");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                r#type: error_type.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
