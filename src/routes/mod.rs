//! Route definitions for the loan catalog API.
//!
//! CORS is configured per resource so each advertises exactly the methods it
//! supports; there is no outer catch-all CORS layer that could answer a
//! preflight with a wider method list.

mod loans;
mod reviews;

pub use loans::loan_routes;
pub use reviews::review_routes;

use axum::http::HeaderValue;
use tower_http::cors::AllowOrigin;

/// Allowed origins from a comma-separated list, permissive when unset.
pub(crate) fn cors_origin(allowed_origins: Option<&str>) -> AllowOrigin {
    match allowed_origins.map(str::trim) {
        Some(s) if !s.is_empty() => AllowOrigin::list(
            s.split(',')
                .filter_map(|o| o.trim().parse::<HeaderValue>().ok()),
        ),
        _ => AllowOrigin::any(),
    }
}
