//! Object storage holding the gallery's photos

mod error;
#[cfg(any(test, feature = "test-utils"))]
mod in_memory;
mod s3;

use std::time::Duration;

use async_trait::async_trait;

pub use error::{StoreError, StoreResult};
#[cfg(any(test, feature = "test-utils"))]
pub use in_memory::{InMemoryObjectStore, SignRequest};
pub use s3::S3ObjectStore;

/// A stored photo, identified by its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoObject {
    /// Object key, doubling as the photo's filename
    pub key: String,
}

impl PhotoObject {
    /// Creates a photo object for `key`
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Blob storage that can enumerate a bucket and hand out time-limited
/// retrieval URLs
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Lists every object in `bucket` in the store's native order
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListFailed` if enumeration fails
    async fn list(&self, bucket: &str) -> StoreResult<Vec<PhotoObject>>;

    /// Produces a URL granting read access to `key` for `expires_in`
    ///
    /// The key is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SignFailed` or `StoreError::ConfigError` if the
    /// URL cannot be produced
    async fn sign_retrieval_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StoreResult<String>;
}
