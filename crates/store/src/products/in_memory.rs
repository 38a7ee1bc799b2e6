//! In-memory product store for dev/test.

use std::sync::RwLock;

use async_trait::async_trait;

use launchdir_catalog::{Product, ProductFilter};
use launchdir_core::ProductId;

use crate::error::StoreResult;

use super::ProductStore;

/// Products held in a process-local vector. Filtering evaluates the same
/// predicate closures the domain defines, so it stays in agreement with the
/// SQL the Postgres store compiles.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: Product) -> StoreResult<Product> {
        self.products.write().unwrap().push(product.clone());
        Ok(product)
    }

    async fn query(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let predicates = filter.predicates();
        Ok(self
            .products
            .read()
            .unwrap()
            .iter()
            .filter(|p| predicates.iter().all(|pred| pred(p)))
            .cloned()
            .collect())
    }

    async fn get(&self, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn increment_view_count(&self, id: ProductId) -> StoreResult<()> {
        if let Some(product) = self
            .products
            .write()
            .unwrap()
            .iter_mut()
            .find(|p| p.id == id)
        {
            product.view_count += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use launchdir_core::UserId;

    fn product(name: &str, tags: &[&str], remote: bool) -> Product {
        Product {
            id: ProductId::new(),
            program_name: name.to_string(),
            website: "https://example.com".to_string(),
            program_type: "accelerator".to_string(),
            financial_support: None,
            program_length: None,
            location: None,
            focus_area: None,
            target_stage: vec!["idea".to_string()],
            countries: vec!["US".to_string()],
            is_remote: remote,
            punchline: None,
            description: None,
            logo_src: None,
            user_id: UserId::new(),
            view_count: 0,
            approved: true,
            categories: vec!["accelerator".to_string()],
            labels: vec!["accelerator".to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn query_composes_supplied_criteria_only() {
        let store = InMemoryProductStore::new();
        store.insert(product("Climate Builders", &["climate"], true)).await.unwrap();
        store.insert(product("Fintech Forge", &["fintech"], false)).await.unwrap();

        let all = store.query(&ProductFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let filter = ProductFilter {
            tag: Some("climate".to_string()),
            remote: Some(true),
            ..Default::default()
        };
        let hits = store.query(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].program_name, "Climate Builders");
    }

    #[tokio::test]
    async fn increment_bumps_the_counter_and_ignores_unknown_ids() {
        let store = InMemoryProductStore::new();
        let inserted = store.insert(product("Foundry", &[], false)).await.unwrap();

        store.increment_view_count(inserted.id).await.unwrap();
        store.increment_view_count(inserted.id).await.unwrap();
        store.increment_view_count(ProductId::new()).await.unwrap();

        let fetched = store.get(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched.view_count, 2);
    }
}
