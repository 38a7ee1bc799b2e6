//! HTTP object storage client.
//!
//! Talks to a hosted storage service with a flat REST surface: objects are
//! uploaded to `{base_url}/object/{bucket}/{path}` and served publicly from
//! `{base_url}/object/public/{bucket}/{path}`. The `x-upsert: false` header
//! enforces the do-not-overwrite conflict policy server-side.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{StoreError, StoreResult};

use super::ObjectStorage;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Service endpoint, e.g. `https://storage.example.com/storage/v1`.
    pub base_url: String,
    /// Bucket holding logo assets.
    pub bucket: String,
    /// Optional bearer key for the upload path (public reads need none).
    pub api_key: Option<String>,
}

pub struct HttpObjectStorage {
    client: reqwest::Client,
    config: StorageConfig,
}

impl HttpObjectStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> StoreResult<()> {
        let url = format!(
            "{}/object/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            path
        );

        let mut request = self
            .client
            .post(&url)
            .header("content-type", content_type.to_string())
            .header("x-upsert", "false")
            .body(bytes);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(StoreError::ObjectExists(path.to_string())),
            status => Err(StoreError::Storage(format!(
                "upload of {path} failed with status {status}"
            ))),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            path
        )
    }
}
