//! Postgres-backed filter option store.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use launchdir_catalog::Country;

use crate::error::StoreResult;

use super::{FilterOptionStore, OptionTable};

pub struct PostgresFilterOptionStore {
    pool: PgPool,
}

impl PostgresFilterOptionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn names_from(&self, table: OptionTable) -> StoreResult<Vec<String>> {
        // Table names come from a closed enum, not user input.
        let sql = format!("SELECT name FROM {}", table.table_name());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl FilterOptionStore for PostgresFilterOptionStore {
    async fn category_names(&self) -> StoreResult<Vec<String>> {
        self.names_from(OptionTable::Categories).await
    }

    async fn label_names(&self) -> StoreResult<Vec<String>> {
        self.names_from(OptionTable::Labels).await
    }

    async fn tag_names(&self) -> StoreResult<Vec<String>> {
        self.names_from(OptionTable::Tags).await
    }

    async fn countries(&self) -> StoreResult<Vec<Country>> {
        let rows = sqlx::query("SELECT name, code FROM countries")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| {
                Ok(Country {
                    name: row.try_get("name")?,
                    code: row.try_get("code")?,
                })
            })
            .collect()
    }

    async fn insert_if_absent(&self, table: OptionTable, name: &str) -> StoreResult<()> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
            table.table_name()
        );
        sqlx::query(&sql).bind(name).execute(&self.pool).await?;
        Ok(())
    }
}
