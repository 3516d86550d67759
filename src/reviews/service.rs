//! Review service layer.
//!
//! Reads only ever surface approved reviews; new reviews always land in the
//! moderation queue (`is_approved = false`), whatever the caller sends.

use sqlx::PgPool;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{CreateReviewRequest, Review};

#[derive(Clone)]
pub struct ReviewService {
    db_pool: PgPool,
}

impl ReviewService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// List approved reviews for a loan, newest first.
    ///
    /// A loan with no approved reviews yields an empty list, not an error.
    pub async fn list_for_loan(&self, loan_id: i32) -> Result<Vec<Review>, ApiError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE loan_id = $1 AND is_approved = true
            ORDER BY created_at DESC
            "#,
        )
        .bind(loan_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(reviews)
    }

    /// Insert a review in unapproved state.
    ///
    /// `loan_id` is not checked against the loans table; the original store
    /// allows orphaned reviews and we keep that behavior.
    pub async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, ApiError> {
        request.validate()?;

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (loan_id, author_name, rating, comment, is_approved)
            VALUES ($1, $2, $3, $4, false)
            RETURNING *
            "#,
        )
        .bind(request.loan_id)
        .bind(&request.author_name)
        .bind(request.rating)
        .bind(&request.comment)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(review)
    }
}
