#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageError, StorageResult};
use mediadrop_core::StorageConfig;
use std::sync::Arc;

/// Create the storage backend described by the configuration
pub async fn create_storage(config: &StorageConfig) -> StorageResult<Arc<dyn Storage>> {
    if config.bucket.trim().is_empty() {
        return Err(StorageError::ConfigError(
            "BUCKET_NAME not configured".to_string(),
        ));
    }

    #[cfg(feature = "storage-s3")]
    {
        let storage = S3Storage::new(config).await;
        Ok(Arc::new(storage))
    }

    #[cfg(not(feature = "storage-s3"))]
    {
        Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        ))
    }
}
