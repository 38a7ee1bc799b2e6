//! Product repository.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;

use async_trait::async_trait;

use launchdir_catalog::{Product, ProductFilter};
use launchdir_core::ProductId;

use crate::error::StoreResult;

/// Persistent product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a newly submitted product row.
    async fn insert(&self, product: Product) -> StoreResult<Product>;

    /// Query products by the supplied criteria (AND of supplied predicates;
    /// an empty filter returns everything).
    async fn query(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>>;

    /// Fetch one product by id.
    async fn get(&self, id: ProductId) -> StoreResult<Option<Product>>;

    /// Atomically increment a product's view counter. A missing id is a
    /// no-op, matching the stored procedure.
    async fn increment_view_count(&self, id: ProductId) -> StoreResult<()>;
}
