//! In-memory object storage for dev/test.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};

use super::ObjectStorage;

#[derive(Debug, Default)]
pub struct InMemoryObjectStorage {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.objects.read().unwrap().contains_key(path)
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>, _content_type: &str) -> StoreResult<()> {
        let mut objects = self.objects.write().unwrap();
        if objects.contains_key(path) {
            return Err(StoreError::ObjectExists(path.to_string()));
        }
        objects.insert(path.to_string(), bytes);
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://logos/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_upload_to_same_path_conflicts() {
        let storage = InMemoryObjectStorage::new();
        storage.upload("acme/1.png", vec![1, 2, 3], "image/png").await.unwrap();

        let err = storage
            .upload("acme/1.png", vec![4, 5, 6], "image/png")
            .await
            .unwrap_err();
        match err {
            StoreError::ObjectExists(path) => assert_eq!(path, "acme/1.png"),
            other => panic!("expected ObjectExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn public_url_is_derived_from_the_path() {
        let storage = InMemoryObjectStorage::new();
        storage.upload("acme/1.png", vec![1], "image/png").await.unwrap();
        assert_eq!(storage.public_url("acme/1.png"), "memory://logos/acme/1.png");
    }
}
