//! Review repository.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryReviewStore;
pub use postgres::PostgresReviewStore;

use async_trait::async_trait;

use launchdir_core::ProductId;
use launchdir_reviews::Review;

use crate::error::StoreResult;

/// Persistent review collection.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert(&self, review: Review) -> StoreResult<Review>;

    /// All reviews for one product, newest first.
    async fn list_for_product(&self, product_id: ProductId) -> StoreResult<Vec<Review>>;
}
