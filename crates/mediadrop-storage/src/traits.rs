//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::AccessPolicy;
use async_trait::async_trait;
use bytes::Bytes;
use mediadrop_core::AppError;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Every backend fault surfaces to clients as the same generic upload failure.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Parameters of a single put-object call
#[derive(Debug, Clone)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    pub access_policy: AccessPolicy,
}

/// Storage abstraction trait
///
/// The upload route only ever writes objects, so backends expose a single
/// put operation. Public URLs are computed by the caller from configuration.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `request.body` under `request.bucket`/`request.key`.
    async fn put_object(&self, request: PutObject) -> StorageResult<()>;
}
