//! Postgres-backed review store.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use launchdir_core::{ProductId, ReviewId};
use launchdir_reviews::Review;

use crate::error::StoreResult;

use super::ReviewStore;

pub struct PostgresReviewStore {
    pool: PgPool,
}

impl PostgresReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn insert(&self, review: Review) -> StoreResult<Review> {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                id, product_id, program_name, reviewer_name, reviewer_email,
                program_year, experience, proof, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(review.id.as_uuid())
        .bind(review.product_id.as_uuid())
        .bind(&review.program_name)
        .bind(&review.reviewer_name)
        .bind(&review.reviewer_email)
        .bind(review.program_year)
        .bind(&review.experience)
        .bind(&review.proof)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        Ok(review)
    }

    async fn list_for_product(&self, product_id: ProductId) -> StoreResult<Vec<Review>> {
        let rows = sqlx::query(
            r#"
            SELECT id, product_id, program_name, reviewer_name, reviewer_email,
                   program_year, experience, proof, created_at
            FROM reviews
            WHERE product_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| review_from_row(row).map_err(Into::into))
            .collect()
    }
}

fn review_from_row(row: &PgRow) -> Result<Review, sqlx::Error> {
    Ok(Review {
        id: ReviewId::from_uuid(row.try_get::<Uuid, _>("id")?),
        product_id: ProductId::from_uuid(row.try_get::<Uuid, _>("product_id")?),
        program_name: row.try_get("program_name")?,
        reviewer_name: row.try_get("reviewer_name")?,
        reviewer_email: row.try_get("reviewer_email")?,
        program_year: row.try_get("program_year")?,
        experience: row.try_get("experience")?,
        proof: row.try_get("proof")?,
        created_at: row.try_get("created_at")?,
    })
}
