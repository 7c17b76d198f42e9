//! End-to-end tests against a throwaway oracle feeder.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};

use sei_oracle_exporter::api::create_router;
use sei_oracle_exporter::app::AppState;
use sei_oracle_exporter::domain::{ConstLabels, OracleFeederClient, VotePenaltyCounter};
use sei_oracle_exporter::infra::HttpOracleFeederClient;
use sei_oracle_exporter::test_utils::{sample_value, scrape};

type SeenPaths = Arc<Mutex<Vec<String>>>;

async fn counter_handler(
    State(seen): State<SeenPaths>,
    Path(address): Path<String>,
    uri: Uri,
) -> axum::response::Response {
    seen.lock().unwrap().push(uri.path().to_string());
    match address.as_str() {
        "seivaloper1good" => {
            Json(VotePenaltyCounter::new("5", "2", "100").to_response_body()).into_response()
        }
        "seivaloper1partial" => {
            Json(VotePenaltyCounter::new("8", "N/A", "11").to_response_body()).into_response()
        }
        "seivaloper1html" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"code": 5, "message": "validator not found", "details": []})),
        )
            .into_response(),
    }
}

async fn fallback_handler(State(seen): State<SeenPaths>, uri: Uri) -> StatusCode {
    seen.lock().unwrap().push(uri.path().to_string());
    StatusCode::NOT_FOUND
}

/// Starts a fake oracle feeder and returns its base address.
async fn spawn_upstream() -> (String, SeenPaths) {
    let seen: SeenPaths = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/sei-protocol/sei-chain/oracle/validators/{address}/vote_penalty_counter",
            get(counter_handler),
        )
        .fallback(fallback_handler)
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn exporter(api_address: &str) -> Router {
    let feeder = Arc::new(HttpOracleFeederClient::with_defaults(api_address).unwrap());
    let labels = ConstLabels::new().with("chain_id", "pacific-1");
    create_router(Arc::new(AppState::new(feeder, labels)))
}

#[tokio::test]
async fn test_client_fetches_counter() {
    let (api_address, seen) = spawn_upstream().await;
    let client = HttpOracleFeederClient::with_defaults(&api_address).unwrap();

    let counter = client.vote_penalty_counter("seivaloper1good").await.unwrap();

    assert_eq!(counter, VotePenaltyCounter::new("5", "2", "100"));
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["/sei-protocol/sei-chain/oracle/validators/seivaloper1good/vote_penalty_counter"]
    );
}

#[tokio::test]
async fn test_not_found_body_is_a_decode_error() {
    let (api_address, _) = spawn_upstream().await;
    let client = HttpOracleFeederClient::with_defaults(&api_address).unwrap();

    let err = client
        .vote_penalty_counter("seivaloper1unknown")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        sei_oracle_exporter::domain::OracleFeederError::Decode(_)
    ));
}

#[tokio::test]
async fn test_scrape_through_real_client() {
    let (api_address, _) = spawn_upstream().await;
    let router = exporter(&api_address);

    let (status, text) = scrape(router, "/metrics/sei?address=seivaloper1good").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("vote_penalty_miss_count{chain_id=\"pacific-1\"} 5"));
    assert_eq!(sample_value(&text, "vote_penalty_abstain_count"), Some(2.0));
    assert_eq!(sample_value(&text, "vote_penalty_success_count"), Some(100.0));
}

#[tokio::test]
async fn test_scrape_with_partial_counter() {
    let (api_address, _) = spawn_upstream().await;
    let router = exporter(&api_address);

    let (_, text) = scrape(router, "/metrics/sei?address=seivaloper1partial").await;

    assert_eq!(sample_value(&text, "vote_penalty_miss_count"), Some(8.0));
    assert_eq!(sample_value(&text, "vote_penalty_abstain_count"), Some(0.0));
    assert_eq!(sample_value(&text, "vote_penalty_success_count"), Some(11.0));
}

#[tokio::test]
async fn test_scrape_with_upstream_error_status() {
    let (api_address, _) = spawn_upstream().await;
    let router = exporter(&api_address);

    let (status, text) = scrape(router, "/metrics/sei?address=seivaloper1unknown").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_value(&text, "vote_penalty_miss_count"), Some(0.0));
    assert_eq!(sample_value(&text, "vote_penalty_success_count"), Some(0.0));
}

#[tokio::test]
async fn test_scrape_with_html_body() {
    let (api_address, _) = spawn_upstream().await;
    let router = exporter(&api_address);

    let (status, text) = scrape(router, "/metrics/sei?address=seivaloper1html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_value(&text, "vote_penalty_abstain_count"), Some(0.0));
}

#[tokio::test]
async fn test_scrape_without_address_hits_empty_segment() {
    let (api_address, seen) = spawn_upstream().await;
    let router = exporter(&api_address);

    let (status, _) = scrape(router, "/metrics/sei").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["/sei-protocol/sei-chain/oracle/validators//vote_penalty_counter"]
    );
}

#[tokio::test]
async fn test_scrape_with_unreachable_upstream() {
    // Bind and drop a listener so nothing is accepting on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let router = exporter(&format!("http://{addr}"));

    let (status, text) = scrape(router, "/metrics/sei?address=seivaloper1good").await;

    assert_eq!(status, StatusCode::OK);
    for metric in [
        "vote_penalty_miss_count",
        "vote_penalty_abstain_count",
        "vote_penalty_success_count",
    ] {
        assert_eq!(sample_value(&text, metric), Some(0.0), "{metric}");
    }
}
