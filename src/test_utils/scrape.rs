//! Helpers for driving the router and reading the rendered page.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

/// Sends `GET uri` through `router` and returns the status and body text.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not UTF-8.
pub async fn scrape(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Value of the first sample line of `metric` in a text exposition page.
pub fn sample_value(text: &str, metric: &str) -> Option<f64> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .find(|line| line.starts_with(metric))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}
