//! Loan route definitions

use axum::http::Method;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::*;
use crate::routes::cors_origin;
use crate::state::AppState;

pub fn loan_routes(allowed_origins: Option<&str>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/loans",
            get(get_loans)
                .post(create_loan)
                .put(loan_id_required)
                .delete(loan_id_required)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/loans/:id",
            put(update_loan)
                .delete(delete_loan)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
}
