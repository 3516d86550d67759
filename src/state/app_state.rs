//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::loans::LoanService;
use crate::reviews::ReviewService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanService>,
    pub review_service: Arc<ReviewService>,
}

impl AppState {
    pub fn new(loan_service: Arc<LoanService>, review_service: Arc<ReviewService>) -> Self {
        Self {
            loan_service,
            review_service,
        }
    }
}

impl FromRef<AppState> for Arc<LoanService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<ReviewService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.review_service.clone()
    }
}
