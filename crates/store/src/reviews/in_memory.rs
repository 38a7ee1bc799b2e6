//! In-memory review store for dev/test.

use std::sync::RwLock;

use async_trait::async_trait;

use launchdir_core::ProductId;
use launchdir_reviews::Review;

use crate::error::StoreResult;

use super::ReviewStore;

#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn insert(&self, review: Review) -> StoreResult<Review> {
        self.reviews.write().unwrap().push(review.clone());
        Ok(review)
    }

    async fn list_for_product(&self, product_id: ProductId) -> StoreResult<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .reviews
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use launchdir_core::ReviewId;

    fn review(product_id: ProductId, offset_minutes: i64) -> Review {
        Review {
            id: ReviewId::new(),
            product_id,
            program_name: "Climate Builders".to_string(),
            reviewer_name: "Sam".to_string(),
            reviewer_email: "sam@startup.example".to_string(),
            program_year: 2024,
            experience: "Solid.".to_string(),
            proof: "batch email".to_string(),
            created_at: Utc::now() + Duration::minutes(offset_minutes),
        }
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_product_and_newest_first() {
        let store = InMemoryReviewStore::new();
        let product = ProductId::new();
        let other = ProductId::new();

        let oldest = store.insert(review(product, 0)).await.unwrap();
        let newest = store.insert(review(product, 10)).await.unwrap();
        store.insert(review(other, 5)).await.unwrap();

        let listed = store.list_for_product(product).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newest.id);
        assert_eq!(listed[1].id, oldest.id);
    }
}
