//! Gallery configuration resolved once at startup

use std::time::Duration;

use thiserror::Error;

/// How long a signed photo URL stays valid
pub const SIGNED_URL_EXPIRY: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors raised while resolving startup configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PHOTO_BUCKET_NAME` is not set
    #[error("PHOTO_BUCKET_NAME environment variable is not set")]
    MissingBucketName,

    /// `PHOTO_BUCKET_NAME` is set but blank
    #[error("PHOTO_BUCKET_NAME environment variable is empty")]
    EmptyBucketName,
}

/// Settings the photo handlers need: which bucket to read and how long
/// the URLs they hand out stay valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    bucket_name: String,
    url_expiry: Duration,
}

impl GalleryConfig {
    /// Creates a config for `bucket_name` with the standard 24 hour expiry
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyBucketName` if the name is blank
    pub fn new(bucket_name: impl Into<String>) -> Result<Self, ConfigError> {
        let bucket_name = bucket_name.into().trim().to_string();
        if bucket_name.is_empty() {
            return Err(ConfigError::EmptyBucketName);
        }

        Ok(Self {
            bucket_name,
            url_expiry: SIGNED_URL_EXPIRY,
        })
    }

    /// Bucket holding the photos
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Validity window of signed URLs
    #[must_use]
    pub const fn url_expiry(&self) -> Duration {
        self.url_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_config_uses_one_day_expiry() {
        let config = GalleryConfig::new("photos").unwrap();

        assert_eq!(config.bucket_name(), "photos");
        assert_eq!(config.url_expiry().as_secs(), 86_400);
    }

    #[test]
    fn test_gallery_config_trims_bucket_name() {
        let config = GalleryConfig::new("  photos \n").unwrap();
        assert_eq!(config.bucket_name(), "photos");
    }

    #[test]
    fn test_gallery_config_rejects_blank_bucket_name() {
        assert_eq!(GalleryConfig::new(""), Err(ConfigError::EmptyBucketName));
        assert_eq!(GalleryConfig::new("   "), Err(ConfigError::EmptyBucketName));
    }
}
