//! Object storage for logo assets.

mod http;
mod in_memory;

pub use http::{HttpObjectStorage, StorageConfig};
pub use in_memory::InMemoryObjectStorage;

use async_trait::async_trait;

use crate::error::StoreResult;

/// A bucket of public objects.
///
/// Upload never overwrites: a second upload to the same path fails with
/// [`crate::StoreError::ObjectExists`].
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> StoreResult<()>;

    /// Public URL an uploaded object is served from.
    fn public_url(&self, path: &str) -> String;
}
