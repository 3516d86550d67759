//! Review route definitions

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::*;
use crate::routes::cors_origin;
use crate::state::AppState;

pub fn review_routes(allowed_origins: Option<&str>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/reviews",
            get(get_reviews)
                .post(create_review)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
}
