//! Loan service layer - catalog CRUD against the `loans` table.

use sqlx::{PgPool, QueryBuilder};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{CreateLoanRequest, Loan, UpdateLoanRequest};

/// Catalog ordering: quality first, popularity second, insertion order for
/// ties. The in-process equivalent is [`Loan::catalog_cmp`].
pub const CATALOG_ORDER_SQL: &str = "ORDER BY rating DESC, clicks DESC, id ASC";

/// Service for managing the loan offer catalog
#[derive(Clone)]
pub struct LoanService {
    db_pool: PgPool,
}

impl LoanService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// List loan offers in catalog order.
    ///
    /// With `active_only`, offers with `is_active = false` are filtered out.
    pub async fn list_loans(&self, active_only: bool) -> Result<Vec<Loan>, ApiError> {
        let query = if active_only {
            format!(
                "SELECT * FROM loans WHERE is_active = true {}",
                CATALOG_ORDER_SQL
            )
        } else {
            format!("SELECT * FROM loans {}", CATALOG_ORDER_SQL)
        };

        let loans = sqlx::query_as::<_, Loan>(&query)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(loans)
    }

    pub async fn get_loan(&self, id: i32) -> Result<Loan, ApiError> {
        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(ApiError::NotFound("Loan not found".to_string()))?;

        Ok(loan)
    }

    pub async fn create_loan(&self, request: CreateLoanRequest) -> Result<Loan, ApiError> {
        request.validate()?;

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (
                name, logo, amount_min, amount_max, term_min, term_max,
                rate, approval_rate, rating, reviews, features, requirements,
                color, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.logo)
        .bind(request.amount_min)
        .bind(request.amount_max)
        .bind(request.term_min)
        .bind(request.term_max)
        .bind(request.rate)
        .bind(request.approval_rate)
        .bind(request.rating)
        .bind(request.reviews)
        .bind(&request.features)
        .bind(&request.requirements)
        .bind(&request.color)
        .bind(request.is_active)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(loan)
    }

    /// Apply a partial update: only fields carrying a value are written,
    /// `updated_at` is always refreshed.
    pub async fn update_loan(&self, id: i32, request: UpdateLoanRequest) -> Result<Loan, ApiError> {
        request.validate()?;

        if request.is_empty() {
            return Err(ApiError::BadRequest("No fields to update".to_string()));
        }

        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new("UPDATE loans SET ");
        {
            let mut set = builder.separated(", ");

            if let Some(name) = request.name {
                set.push("name = ");
                set.push_bind_unseparated(name);
            }
            if let Some(logo) = request.logo {
                set.push("logo = ");
                set.push_bind_unseparated(logo);
            }
            if let Some(amount_min) = request.amount_min {
                set.push("amount_min = ");
                set.push_bind_unseparated(amount_min);
            }
            if let Some(amount_max) = request.amount_max {
                set.push("amount_max = ");
                set.push_bind_unseparated(amount_max);
            }
            if let Some(term_min) = request.term_min {
                set.push("term_min = ");
                set.push_bind_unseparated(term_min);
            }
            if let Some(term_max) = request.term_max {
                set.push("term_max = ");
                set.push_bind_unseparated(term_max);
            }
            if let Some(rate) = request.rate {
                set.push("rate = ");
                set.push_bind_unseparated(rate);
            }
            if let Some(approval_rate) = request.approval_rate {
                set.push("approval_rate = ");
                set.push_bind_unseparated(approval_rate);
            }
            if let Some(rating) = request.rating {
                set.push("rating = ");
                set.push_bind_unseparated(rating);
            }
            if let Some(reviews) = request.reviews {
                set.push("reviews = ");
                set.push_bind_unseparated(reviews);
            }
            if let Some(features) = request.features {
                set.push("features = ");
                set.push_bind_unseparated(features);
            }
            if let Some(requirements) = request.requirements {
                set.push("requirements = ");
                set.push_bind_unseparated(requirements);
            }
            if let Some(color) = request.color {
                set.push("color = ");
                set.push_bind_unseparated(color);
            }
            if let Some(is_active) = request.is_active {
                set.push("is_active = ");
                set.push_bind_unseparated(is_active);
            }

            set.push("updated_at = NOW()");
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING *");

        let loan = builder
            .build_query_as::<Loan>()
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(ApiError::NotFound("Loan not found".to_string()))?;

        Ok(loan)
    }

    /// Delete a loan offer, returning the deleted id.
    pub async fn delete_loan(&self, id: i32) -> Result<i32, ApiError> {
        let deleted: Option<(i32,)> =
            sqlx::query_as("DELETE FROM loans WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?;

        match deleted {
            Some((id,)) => Ok(id),
            None => Err(ApiError::NotFound("Loan not found".to_string())),
        }
    }
}
