//! In-memory object store used by tests

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::{ObjectStore, PhotoObject, StoreError, StoreResult};

/// A signing request observed by [`InMemoryObjectStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    /// Bucket the URL was requested for
    pub bucket: String,
    /// Object key the URL points at
    pub key: String,
    /// Requested validity window
    pub expires_in: Duration,
}

/// Object store that keeps keys in memory and records every signing call
///
/// Keys are listed in insertion order. Failures can be injected for the
/// listing call or for signing individual keys, and listing can be slowed
/// down to stand in for a large bucket.
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    keys: Mutex<Vec<String>>,
    sign_requests: Mutex<Vec<SignRequest>>,
    list_failure: Mutex<Option<String>>,
    list_delay: Mutex<Option<Duration>>,
    sign_failures: Mutex<HashMap<String, String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryObjectStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given keys
    #[must_use]
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let store = Self::new();
        for key in keys {
            store.insert(key);
        }
        store
    }

    /// Adds a key, keeping the first position if it is already present
    pub fn insert(&self, key: impl Into<String>) {
        let key = key.into();
        let mut keys = lock(&self.keys);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    /// Makes every subsequent `list` call fail with `message`
    pub fn fail_listing(&self, message: impl Into<String>) {
        *lock(&self.list_failure) = Some(message.into());
    }

    /// Makes every subsequent `list` call wait `delay` before answering
    pub fn delay_listing(&self, delay: Duration) {
        *lock(&self.list_delay) = Some(delay);
    }

    /// Makes signing `key` fail with `message`
    pub fn fail_signing(&self, key: impl Into<String>, message: impl Into<String>) {
        lock(&self.sign_failures).insert(key.into(), message.into());
    }

    /// Returns every signing request seen so far, in call order
    #[must_use]
    pub fn sign_requests(&self) -> Vec<SignRequest> {
        lock(&self.sign_requests).clone()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn list(&self, _bucket: &str) -> StoreResult<Vec<PhotoObject>> {
        let delay = *lock(&self.list_delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = lock(&self.list_failure).clone() {
            return Err(StoreError::ListFailed(message));
        }

        Ok(lock(&self.keys)
            .iter()
            .map(|key| PhotoObject::new(key.as_str()))
            .collect())
    }

    async fn sign_retrieval_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StoreResult<String> {
        let sequence = {
            let mut requests = lock(&self.sign_requests);
            requests.push(SignRequest {
                bucket: bucket.to_string(),
                key: key.to_string(),
                expires_in,
            });
            requests.len()
        };

        if let Some(message) = lock(&self.sign_failures).get(key) {
            return Err(StoreError::SignFailed(message.clone()));
        }

        Ok(format!(
            "https://{bucket}.s3.localhost/{key}?X-Amz-Expires={}&X-Amz-Signature={sequence:016x}",
            expires_in.as_secs()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_keys_in_insertion_order() {
        let store = InMemoryObjectStore::with_keys(["b.jpg", "a.jpg", "b.jpg"]);

        let keys: Vec<String> = store
            .list("bucket")
            .await
            .unwrap()
            .into_iter()
            .map(|object| object.key)
            .collect();

        assert_eq!(keys, vec!["b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_records_sign_requests() {
        let store = InMemoryObjectStore::new();

        let url = store
            .sign_retrieval_url("bucket", "cat.png", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(url.starts_with("https://bucket.s3.localhost/cat.png?"));
        assert!(url.contains("X-Amz-Expires=60"));
        assert_eq!(
            store.sign_requests(),
            vec![SignRequest {
                bucket: "bucket".to_string(),
                key: "cat.png".to_string(),
                expires_in: Duration::from_secs(60),
            }]
        );
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = InMemoryObjectStore::with_keys(["cat.png"]);
        store.fail_listing("listing is down");
        store.fail_signing("cat.png", "signer is down");

        assert_eq!(
            store.list("bucket").await,
            Err(StoreError::ListFailed("listing is down".to_string()))
        );
        assert_eq!(
            store
                .sign_retrieval_url("bucket", "cat.png", Duration::from_secs(60))
                .await,
            Err(StoreError::SignFailed("signer is down".to_string()))
        );
    }
}
