//! Data models for the loan catalog and review API.
//!
//! Row types map 1:1 onto the `loans` and `reviews` tables; request types
//! carry the validation bounds enforced on write paths.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use validator::Validate;

/// Loan offer row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Loan {
    pub id: i32,
    pub name: String,
    pub logo: String,
    pub amount_min: i32,
    pub amount_max: i32,
    pub term_min: i32,
    pub term_max: i32,
    pub rate: f64,
    pub approval_rate: i32,
    pub rating: f64,
    pub reviews: i32,
    pub features: Vec<String>,
    pub requirements: Vec<String>,
    pub color: String,
    pub is_active: bool,
    /// Read-only popularity counter, only used for list ordering.
    pub clicks: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Catalog ordering: rating descending, clicks descending, then id
    /// ascending. In-process equivalent of the list query's ORDER BY.
    pub fn catalog_cmp(&self, other: &Loan) -> std::cmp::Ordering {
        other
            .rating
            .total_cmp(&self.rating)
            .then(other.clicks.cmp(&self.clicks))
            .then(self.id.cmp(&other.id))
    }
}

/// Customer review row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub loan_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

fn default_reviews() -> i32 {
    0
}

fn default_is_active() -> bool {
    true
}

/// Payload for creating a loan offer
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLoanRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 10))]
    pub logo: String,
    #[validate(range(min = 0))]
    pub amount_min: i32,
    #[validate(range(min = 0))]
    pub amount_max: i32,
    #[validate(range(min = 1))]
    pub term_min: i32,
    #[validate(range(min = 1))]
    pub term_max: i32,
    #[validate(range(min = 0.0))]
    pub rate: f64,
    #[validate(range(min = 0, max = 100))]
    pub approval_rate: i32,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default = "default_reviews")]
    #[validate(range(min = 0))]
    pub reviews: i32,
    pub features: Vec<String>,
    pub requirements: Vec<String>,
    #[validate(length(min = 1))]
    pub color: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Partial update payload for a loan offer.
///
/// Only fields present and non-null are applied; the caller must supply at
/// least one.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLoanRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub logo: Option<String>,
    #[validate(range(min = 0))]
    pub amount_min: Option<i32>,
    #[validate(range(min = 0))]
    pub amount_max: Option<i32>,
    #[validate(range(min = 1))]
    pub term_min: Option<i32>,
    #[validate(range(min = 1))]
    pub term_max: Option<i32>,
    #[validate(range(min = 0.0))]
    pub rate: Option<f64>,
    #[validate(range(min = 0, max = 100))]
    pub approval_rate: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0))]
    pub reviews: Option<i32>,
    pub features: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    #[validate(length(min = 1))]
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateLoanRequest {
    /// True when no field carries a value, i.e. there is nothing to update.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.logo.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
            && self.term_min.is_none()
            && self.term_max.is_none()
            && self.rate.is_none()
            && self.approval_rate.is_none()
            && self.rating.is_none()
            && self.reviews.is_none()
            && self.features.is_none()
            && self.requirements.is_none()
            && self.color.is_none()
            && self.is_active.is_none()
    }
}

/// Payload for submitting a review
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1))]
    pub loan_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(min = 10, max = 2000))]
    pub comment: String,
}

/// Query for listing or fetching loans
#[derive(Debug, Default, Deserialize)]
pub struct LoanQuery {
    pub id: Option<i32>,
    pub active: Option<bool>,
}

/// Query for listing reviews
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub loan_id: Option<i32>,
}

/// Confirmation returned after deleting a loan
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i32,
}

/// Body returned after submitting a review
#[derive(Debug, Serialize)]
pub struct ReviewSubmission {
    pub message: String,
    pub review: Review,
}
