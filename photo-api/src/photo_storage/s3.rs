//! Amazon S3 backed object store

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use tracing::{debug, error};

use super::{ObjectStore, PhotoObject, StoreError, StoreResult};

/// Object store client for S3 operations
pub struct S3ObjectStore {
    s3_client: Arc<S3Client>,
}

impl S3ObjectStore {
    /// Creates a new S3 object store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    /// Lists every object in the bucket, following continuation tokens
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListFailed` if any page request fails
    async fn list(&self, bucket: &str) -> StoreResult<Vec<PhotoObject>> {
        let mut pages = self
            .s3_client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut objects = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                error!("Failed to list objects in {bucket}: {e}");
                StoreError::from(e)
            })?;

            objects.extend(
                page.contents()
                    .iter()
                    .filter_map(|object| object.key())
                    .map(PhotoObject::new),
            );
        }

        debug!("Listed {} objects in {}", objects.len(), bucket);

        Ok(objects)
    }

    /// Generates a presigned URL for GET operations
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConfigError` if presigning config creation fails
    /// Returns `StoreError::SignFailed` if presigned URL generation fails
    async fn sign_retrieval_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StoreResult<String> {
        let presigned_config = PresigningConfig::expires_in(expires_in).map_err(|e| {
            StoreError::ConfigError(format!("Failed to create presigning config: {e}"))
        })?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigned_config)
            .await?;

        Ok(presigned_request.uri().to_string())
    }
}
