//! Storage manager — selects and fronts the configured provider.

use std::sync::Arc;

use bytes::Bytes;

use docportal_core::config::storage::StorageConfig;
use docportal_core::error::AppError;
use docportal_core::result::AppResult;
use docportal_core::traits::storage::{ByteStream, StorageProvider};

use crate::providers::local::LocalStorageProvider;

/// Fronts the configured [`StorageProvider`] implementation.
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
}

impl StorageManager {
    /// Build a manager from configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn StorageProvider> = match config.provider.as_str() {
            "local" => Arc::new(
                LocalStorageProvider::new(&format!("{}/storage", config.data_root)).await?,
            ),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'"
                )));
            }
        };

        Ok(Self { provider })
    }

    /// Build a manager around an existing provider (used by tests).
    pub fn with_provider(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// Return the provider type name.
    pub fn provider_type(&self) -> &str {
        self.provider.provider_type()
    }

    /// Check that the backing provider is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Write bytes and return nothing; the caller keeps the locator.
    pub async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        self.provider.write(path, data).await
    }

    /// Read a stored object fully into memory.
    pub async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        self.provider.read_bytes(path).await
    }

    /// Read a stored object as a byte stream.
    pub async fn read(&self, path: &str) -> AppResult<ByteStream> {
        self.provider.read(path).await
    }

    /// Delete a stored object.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.provider.delete(path).await
    }

    /// Check whether a stored object exists.
    pub async fn exists(&self, path: &str) -> AppResult<bool> {
        self.provider.exists(path).await
    }
}
