//! Postgres-backed product store.
//!
//! The optional filter is compiled into SQL with `QueryBuilder`: one clause
//! per supplied criterion, ANDed. Set criteria use array containment, the
//! text search uses `ILIKE` with escaped wildcards across the three
//! searchable columns.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use launchdir_catalog::{Product, ProductFilter};
use launchdir_core::{ProductId, UserId};

use crate::error::StoreResult;

use super::ProductStore;

const PRODUCT_COLUMNS: &str = "id, program_name, website, program_type, financial_support, \
     program_length, location, focus_area, target_stage, countries, is_remote, punchline, \
     description, logo_src, user_id, view_count, approved, categories, labels, tags, \
     featured, created_at";

pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn insert(&self, product: Product) -> StoreResult<Product> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, program_name, website, program_type, financial_support,
                program_length, location, focus_area, target_stage, countries,
                is_remote, punchline, description, logo_src, user_id,
                view_count, approved, categories, labels, tags, featured, created_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22
            )
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.program_name)
        .bind(&product.website)
        .bind(&product.program_type)
        .bind(&product.financial_support)
        .bind(&product.program_length)
        .bind(&product.location)
        .bind(&product.focus_area)
        .bind(&product.target_stage)
        .bind(&product.countries)
        .bind(product.is_remote)
        .bind(&product.punchline)
        .bind(&product.description)
        .bind(&product.logo_src)
        .bind(product.user_id.as_uuid())
        .bind(product.view_count)
        .bind(product.approved)
        .bind(&product.categories)
        .bind(&product.labels)
        .bind(&product.tags)
        .bind(product.featured)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    async fn query(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE TRUE"));

        if let Some(term) = &filter.search {
            let pattern = format!("%{}%", escape_like(term));
            qb.push(" AND (program_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR punchline ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(category) = &filter.category {
            qb.push(" AND categories @> ARRAY[")
                .push_bind(category.clone())
                .push("]");
        }
        if let Some(label) = &filter.label {
            qb.push(" AND labels @> ARRAY[")
                .push_bind(label.clone())
                .push("]");
        }
        if let Some(tag) = &filter.tag {
            qb.push(" AND tags @> ARRAY[")
                .push_bind(tag.clone())
                .push("]");
        }
        if let Some(country) = &filter.country {
            qb.push(" AND countries @> ARRAY[")
                .push_bind(country.clone())
                .push("]");
        }
        if let Some(remote) = filter.remote {
            qb.push(" AND is_remote = ").push_bind(remote);
        }

        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| product_from_row(row).map_err(Into::into))
            .collect()
    }

    async fn get(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| product_from_row(&row).map_err(Into::into))
            .transpose()
    }

    async fn increment_view_count(&self, id: ProductId) -> StoreResult<()> {
        // Stored procedure keeps the increment atomic under concurrent reads.
        sqlx::query("SELECT increment_product_view_count($1)")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: ProductId::from_uuid(row.try_get::<Uuid, _>("id")?),
        program_name: row.try_get("program_name")?,
        website: row.try_get("website")?,
        program_type: row.try_get("program_type")?,
        financial_support: row.try_get("financial_support")?,
        program_length: row.try_get("program_length")?,
        location: row.try_get("location")?,
        focus_area: row.try_get("focus_area")?,
        target_stage: row.try_get("target_stage")?,
        countries: row.try_get("countries")?,
        is_remote: row.try_get("is_remote")?,
        punchline: row.try_get("punchline")?,
        description: row.try_get("description")?,
        logo_src: row.try_get("logo_src")?,
        user_id: UserId::from_uuid(row.try_get::<Uuid, _>("user_id")?),
        view_count: row.try_get("view_count")?,
        approved: row.try_get("approved")?,
        categories: row.try_get("categories")?,
        labels: row.try_get("labels")?,
        tags: row.try_get("tags")?,
        featured: row.try_get("featured")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Escape `ILIKE` wildcards in a user-supplied search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
