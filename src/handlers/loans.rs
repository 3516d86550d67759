//! Loan resource handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::loans::LoanService;
use crate::models::{CreateLoanRequest, DeleteConfirmation, LoanQuery, UpdateLoanRequest};

/// `GET /api/loans` - single loan when `?id=` is given, otherwise the
/// ordered list, filtered to active offers unless `?active=false`.
pub async fn get_loans(
    State(service): State<Arc<LoanService>>,
    Query(query): Query<LoanQuery>,
) -> ApiResult<Response> {
    if let Some(id) = query.id {
        let loan = service.get_loan(id).await?;
        return Ok(Json(loan).into_response());
    }

    let active_only = query.active.unwrap_or(true);
    let loans = service.list_loans(active_only).await?;
    Ok(Json(loans).into_response())
}

/// `POST /api/loans`
pub async fn create_loan(
    State(service): State<Arc<LoanService>>,
    Json(request): Json<CreateLoanRequest>,
) -> ApiResult<Response> {
    let loan = service.create_loan(request).await?;
    Ok((StatusCode::CREATED, Json(loan)).into_response())
}

/// `PUT /api/loans/:id`
pub async fn update_loan(
    State(service): State<Arc<LoanService>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateLoanRequest>,
) -> ApiResult<Response> {
    let loan = service.update_loan(id, request).await?;
    Ok(Json(loan).into_response())
}

/// `DELETE /api/loans/:id`
pub async fn delete_loan(
    State(service): State<Arc<LoanService>>,
    Path(id): Path<i32>,
) -> ApiResult<Response> {
    let id = service.delete_loan(id).await?;
    Ok(Json(DeleteConfirmation {
        message: "Loan deleted".to_string(),
        id,
    })
    .into_response())
}

/// `PUT`/`DELETE /api/loans` without an id is a client error, not a 405.
pub async fn loan_id_required() -> ApiError {
    ApiError::BadRequest("Loan id is required".to_string())
}
