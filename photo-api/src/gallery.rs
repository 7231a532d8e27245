//! Signed-URL photo listing

use std::sync::Arc;

use futures::future::try_join_all;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    photo_storage::{ObjectStore, StoreError, StoreResult},
    types::GalleryConfig,
};

/// A photo's key paired with a time-limited URL to fetch it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignedPhotoUrl {
    /// Object key of the photo
    pub filename: String,
    /// Presigned URL, valid for 24 hours from issuance
    pub url: String,
}

/// Hands out signed URLs for the photos in one bucket
pub struct PhotoGallery {
    store: Arc<dyn ObjectStore>,
    config: GalleryConfig,
}

impl PhotoGallery {
    /// Creates a gallery over `store` using the bucket and expiry in `config`
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, config: GalleryConfig) -> Self {
        Self { store, config }
    }

    /// The configuration this gallery signs with
    #[must_use]
    pub const fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Signs a URL for every photo in the bucket
    ///
    /// URLs are signed concurrently and returned in the store's listing
    /// order. Nothing is returned unless every signature succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` raised by listing or signing
    pub async fn list_photos(&self) -> StoreResult<Vec<SignedPhotoUrl>> {
        let objects = self.store.list(self.config.bucket_name()).await?;

        debug!(
            "Signing {} photo URLs from {}",
            objects.len(),
            self.config.bucket_name()
        );

        try_join_all(objects.into_iter().map(|object| self.sign(object.key))).await
    }

    /// Signs a URL for the photo named `name`
    ///
    /// The key is not checked for existence; a URL for a missing photo
    /// fails when fetched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` if `name` is empty, or the
    /// `StoreError` raised by signing
    pub async fn get_photo(&self, name: &str) -> StoreResult<SignedPhotoUrl> {
        if name.is_empty() {
            return Err(StoreError::InvalidKey(
                "photo name must not be empty".to_string(),
            ));
        }

        self.sign(name.to_string()).await
    }

    async fn sign(&self, key: String) -> StoreResult<SignedPhotoUrl> {
        let url = self
            .store
            .sign_retrieval_url(self.config.bucket_name(), &key, self.config.url_expiry())
            .await?;

        Ok(SignedPhotoUrl { filename: key, url })
    }
}
