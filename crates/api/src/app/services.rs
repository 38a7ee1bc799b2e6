//! Store wiring and request-facing service methods.
//!
//! Every handler goes through [`AppServices`]: an explicitly constructed
//! bundle of store handles (Postgres in production, in-memory for dev/test)
//! plus the page-cache invalidation channel. Read paths are fail-soft here:
//! a backing-store error is logged and degraded to an empty result, so a
//! flaky store never breaks the directory pages.

use std::sync::Arc;

use tokio::sync::broadcast;

use launchdir_catalog::{FilterOptions, Product, ProductFilter};
use launchdir_core::ProductId;
use launchdir_reviews::Review;
use launchdir_store::{
    FilterOptionStore, HttpObjectStorage, InMemoryFilterOptionStore, InMemoryObjectStorage,
    InMemoryProductStore, InMemoryReviewStore, ObjectStorage, PostgresFilterOptionStore,
    PostgresProductStore, PostgresReviewStore, ProductStore, ReviewStore, StorageConfig,
};

/// Scope of a page-cache invalidation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidationScope {
    Path,
    Tag,
}

/// Notice that a cached page path or cache tag became stale.
///
/// Broadcast to the rendering layer over `/events` (lossy; a disconnected
/// renderer just re-fetches on its next load).
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageInvalidation {
    pub scope: InvalidationScope,
    pub value: String,
}

#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
    reviews: Arc<dyn ReviewStore>,
    options: Arc<dyn FilterOptionStore>,
    logos: Arc<dyn ObjectStorage>,
    invalidations_tx: broadcast::Sender<PageInvalidation>,
}

/// Build services from the environment: Postgres + HTTP object storage when
/// `USE_POSTGRES=true`, in-memory stores otherwise.
pub async fn build_services() -> AppServices {
    let use_postgres = std::env::var("USE_POSTGRES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_postgres {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_POSTGRES=true");
        let storage = StorageConfig {
            base_url: std::env::var("STORAGE_URL")
                .expect("STORAGE_URL must be set when USE_POSTGRES=true"),
            bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "product-logos".to_string()),
            api_key: std::env::var("STORAGE_API_KEY").ok(),
        };
        AppServices::postgres(&database_url, storage).await
    } else {
        tracing::warn!("USE_POSTGRES not enabled; using in-memory stores");
        AppServices::in_memory()
    }
}

impl AppServices {
    pub fn new(
        products: Arc<dyn ProductStore>,
        reviews: Arc<dyn ReviewStore>,
        options: Arc<dyn FilterOptionStore>,
        logos: Arc<dyn ObjectStorage>,
    ) -> Self {
        let (invalidations_tx, _) = broadcast::channel(256);
        Self {
            products,
            reviews,
            options,
            logos,
            invalidations_tx,
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductStore::new()),
            Arc::new(InMemoryReviewStore::new()),
            Arc::new(InMemoryFilterOptionStore::new()),
            Arc::new(InMemoryObjectStorage::new()),
        )
    }

    /// Postgres + HTTP object storage wiring (production).
    pub async fn postgres(database_url: &str, storage: StorageConfig) -> Self {
        let pool = sqlx::PgPool::connect(database_url)
            .await
            .expect("failed to connect to Postgres");

        Self::new(
            Arc::new(PostgresProductStore::new(pool.clone())),
            Arc::new(PostgresReviewStore::new(pool.clone())),
            Arc::new(PostgresFilterOptionStore::new(pool)),
            Arc::new(HttpObjectStorage::new(storage)),
        )
    }

    pub fn products(&self) -> &Arc<dyn ProductStore> {
        &self.products
    }

    pub fn reviews(&self) -> &Arc<dyn ReviewStore> {
        &self.reviews
    }

    pub fn options(&self) -> &Arc<dyn FilterOptionStore> {
        &self.options
    }

    pub fn logos(&self) -> &Arc<dyn ObjectStorage> {
        &self.logos
    }

    // ---- fail-soft read paths ----

    /// Fetch the four filter option lists.
    ///
    /// The lookups run concurrently with no ordering guarantees (none depends
    /// on another's result). Any failure degrades the whole set to four empty
    /// lists.
    pub async fn filter_options(&self) -> FilterOptions {
        let (categories, labels, tags, countries) = tokio::join!(
            self.options.category_names(),
            self.options.label_names(),
            self.options.tag_names(),
            self.options.countries(),
        );

        match (categories, labels, tags, countries) {
            (Ok(categories), Ok(labels), Ok(tags), Ok(countries)) => {
                FilterOptions::from_parts(categories, labels, tags, countries)
            }
            (categories, labels, tags, countries) => {
                for err in [
                    categories.err(),
                    labels.err(),
                    tags.err(),
                    countries.err(),
                ]
                .into_iter()
                .flatten()
                {
                    tracing::error!(error = %err, "error fetching filters");
                }
                FilterOptions::empty()
            }
        }
    }

    /// Query products; a store error degrades to an empty result.
    pub async fn query_products(&self, filter: &ProductFilter) -> Vec<Product> {
        match self.products.query(filter).await {
            Ok(products) => products,
            Err(err) => {
                tracing::error!(error = %err, "error searching products");
                Vec::new()
            }
        }
    }

    /// Fetch one product; a store error degrades to absent.
    pub async fn product_by_id(&self, id: ProductId) -> Option<Product> {
        match self.products.get(id).await {
            Ok(product) => product,
            Err(err) => {
                tracing::error!(error = %err, product_id = %id, "error fetching product");
                None
            }
        }
    }

    /// Bump the view counter and invalidate the listing page.
    pub async fn increment_view_count(&self, id: ProductId) {
        if let Err(err) = self.products.increment_view_count(id).await {
            tracing::error!(error = %err, product_id = %id, "error incrementing view count");
        }
        self.invalidate_path("/programs");
    }

    /// Reviews for one product, newest first; a store error degrades to empty.
    pub async fn reviews_for_product(&self, product_id: ProductId) -> Vec<Review> {
        match self.reviews.list_for_product(product_id).await {
            Ok(reviews) => reviews,
            Err(err) => {
                tracing::error!(error = %err, product_id = %product_id, "error fetching reviews");
                Vec::new()
            }
        }
    }

    // ---- page-cache invalidation ----

    pub fn invalidate_path(&self, path: &str) {
        self.publish(PageInvalidation {
            scope: InvalidationScope::Path,
            value: path.to_string(),
        });
    }

    pub fn invalidate_tag(&self, tag: &str) {
        self.publish(PageInvalidation {
            scope: InvalidationScope::Tag,
            value: tag.to_string(),
        });
    }

    pub fn subscribe_invalidations(&self) -> broadcast::Receiver<PageInvalidation> {
        self.invalidations_tx.subscribe()
    }

    fn publish(&self, invalidation: PageInvalidation) {
        tracing::debug!(?invalidation, "page cache invalidated");
        // Lossy broadcast; nothing blocks on a slow or absent subscriber.
        let _ = self.invalidations_tx.send(invalidation);
    }
}
