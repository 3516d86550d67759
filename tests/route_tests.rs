//! Router-level tests: CORS method advertising, preflight handling, and the
//! client-error paths that never reach the database.
//!
//! The pool is lazy and never connected; every request exercised here is
//! answered before any query runs.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use loanboard_server::loans::LoanService;
use loanboard_server::reviews::ReviewService;
use loanboard_server::routes;
use loanboard_server::state::AppState;

fn test_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/loanboard_test")
        .expect("lazy pool");
    let state = AppState::new(
        Arc::new(LoanService::new(pool.clone())),
        Arc::new(ReviewService::new(pool)),
    );

    Router::new()
        .merge(routes::loan_routes(None))
        .merge(routes::review_routes(None))
        .with_state(state)
}

fn preflight_request(uri: &str, requested_method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", requested_method)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// CORS preflight
// ============================================================================

#[tokio::test]
async fn test_reviews_preflight_advertises_only_read_and_create() {
    let response = test_app()
        .oneshot(preflight_request("/api/reviews", "PUT"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .expect("preflight must advertise methods")
        .to_str()
        .unwrap()
        .to_string();

    assert!(allowed.contains("GET"), "allowed = {}", allowed);
    assert!(allowed.contains("POST"), "allowed = {}", allowed);
    assert!(allowed.contains("OPTIONS"), "allowed = {}", allowed);
    assert!(!allowed.contains("PUT"), "allowed = {}", allowed);
    assert!(!allowed.contains("DELETE"), "allowed = {}", allowed);
}

#[tokio::test]
async fn test_loans_preflight_advertises_full_method_set() {
    let response = test_app()
        .oneshot(preflight_request("/api/loans", "DELETE"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .expect("preflight must advertise methods")
        .to_str()
        .unwrap()
        .to_string();

    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(allowed.contains(method), "allowed = {}", allowed);
    }
}

#[tokio::test]
async fn test_plain_options_returns_empty_success() {
    // OPTIONS without Access-Control-Request-Method is not a preflight and
    // reaches the route's own OPTIONS handler.
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/reviews")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Method and parameter client errors
// ============================================================================

#[tokio::test]
async fn test_unsupported_method_returns_405_envelope() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/api/loans")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_put_loans_without_id_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/loans")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Loan id is required");
}

#[tokio::test]
async fn test_delete_loans_without_id_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/loans")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reviews_without_loan_id_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/reviews")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "loan_id is required");
}
