//! HTTP handlers for the loan catalog and review API

mod loans;
mod reviews;

pub use loans::*;
pub use reviews::*;

use axum::http::StatusCode;

use crate::error::ApiError;

/// Fallback for HTTP methods a resource does not support.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// CORS preflight; the resource CorsLayer fills in the allow headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
