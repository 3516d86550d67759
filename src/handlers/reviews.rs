//! Review resource handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateReviewRequest, ReviewQuery, ReviewSubmission};
use crate::reviews::ReviewService;

/// `GET /api/reviews?loan_id=` - approved reviews for a loan, newest first.
pub async fn get_reviews(
    State(service): State<Arc<ReviewService>>,
    Query(query): Query<ReviewQuery>,
) -> ApiResult<Response> {
    let loan_id = query
        .loan_id
        .ok_or_else(|| ApiError::BadRequest("loan_id is required".to_string()))?;

    let reviews = service.list_for_loan(loan_id).await?;
    Ok(Json(reviews).into_response())
}

/// `POST /api/reviews` - submit a review for moderation.
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    Json(request): Json<CreateReviewRequest>,
) -> ApiResult<Response> {
    let review = service.create_review(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewSubmission {
            message: "Review submitted for moderation".to_string(),
            review,
        }),
    )
        .into_response())
}
