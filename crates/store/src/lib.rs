//! `launchdir-store` — the backing-store boundary.
//!
//! Repositories are traits with two implementations each: Postgres (`sqlx`)
//! for production and in-memory for dev/test. Logo assets go to object
//! storage with public URLs (HTTP client, or in-memory for dev/test).
//! Clients are constructed explicitly and passed in; nothing here is a
//! process-global.

pub mod error;
pub mod options;
pub mod products;
pub mod reviews;
pub mod storage;

pub use error::{StoreError, StoreResult};
pub use options::{FilterOptionStore, InMemoryFilterOptionStore, OptionTable, PostgresFilterOptionStore};
pub use products::{InMemoryProductStore, PostgresProductStore, ProductStore};
pub use reviews::{InMemoryReviewStore, PostgresReviewStore, ReviewStore};
pub use storage::{HttpObjectStorage, InMemoryObjectStorage, ObjectStorage, StorageConfig};
