//! Filter option tables (categories, labels, tags, countries).

mod in_memory;
mod postgres;

pub use in_memory::InMemoryFilterOptionStore;
pub use postgres::PostgresFilterOptionStore;

use async_trait::async_trait;

use launchdir_catalog::Country;

use crate::error::StoreResult;

/// The three name-only option tables.
///
/// Countries carry a code as well and are read-only from the application's
/// point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OptionTable {
    Categories,
    Labels,
    Tags,
}

impl OptionTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            OptionTable::Categories => "categories",
            OptionTable::Labels => "labels",
            OptionTable::Tags => "tags",
        }
    }
}

/// Reads (and idempotent writes) against the filter option tables.
#[async_trait]
pub trait FilterOptionStore: Send + Sync {
    async fn category_names(&self) -> StoreResult<Vec<String>>;
    async fn label_names(&self) -> StoreResult<Vec<String>>;
    async fn tag_names(&self) -> StoreResult<Vec<String>>;
    async fn countries(&self) -> StoreResult<Vec<Country>>;

    /// Insert a name if absent; inserting an existing name is a no-op,
    /// never an error.
    async fn insert_if_absent(&self, table: OptionTable, name: &str) -> StoreResult<()>;
}
