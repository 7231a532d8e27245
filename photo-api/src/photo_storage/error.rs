//! Error types for object store operations

use std::error::Error as StdError;

use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::{get_object::GetObjectError, list_objects_v2::ListObjectsV2Error},
};
use thiserror::Error;

/// Result type for object store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the object store
///
/// The display form of every variant is the bare message, since callers
/// surface it verbatim in HTTP responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Enumerating the bucket failed
    #[error("{0}")]
    ListFailed(String),

    /// Producing a presigned retrieval URL failed
    #[error("{0}")]
    SignFailed(String),

    /// The presigning configuration was rejected
    #[error("{0}")]
    ConfigError(String),

    /// The requested key can never name an object
    #[error("{0}")]
    InvalidKey(String),
}

/// The message S3 sent back, or the whole error chain when there is none
/// (dispatch failures, timeouts, unmodeled responses)
fn error_message<E>(error: &E) -> String
where
    E: ProvideErrorMetadata + StdError,
{
    error.message().map_or_else(
        || DisplayErrorContext(error).to_string(),
        ToString::to_string,
    )
}

impl From<SdkError<ListObjectsV2Error>> for StoreError {
    fn from(error: SdkError<ListObjectsV2Error>) -> Self {
        Self::ListFailed(error_message(&error))
    }
}

impl From<SdkError<GetObjectError>> for StoreError {
    fn from(error: SdkError<GetObjectError>) -> Self {
        Self::SignFailed(error_message(&error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;

    #[test]
    fn test_service_error_uses_s3_message() {
        let error = ListObjectsV2Error::generic(
            ErrorMetadata::builder()
                .code("NoSuchBucket")
                .message("The specified bucket does not exist")
                .build(),
        );

        assert_eq!(error_message(&error), "The specified bucket does not exist");
    }

    #[test]
    fn test_error_without_message_falls_back_to_error_chain() {
        let error = GetObjectError::generic(ErrorMetadata::builder().code("SlowDown").build());

        let message = error_message(&error);

        assert!(!message.is_empty());
        assert!(!message.contains("aws_request_id"));
    }
}
