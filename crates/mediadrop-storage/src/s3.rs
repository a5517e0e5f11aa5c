use crate::traits::{PutObject, Storage, StorageError, StorageResult};
use crate::AccessPolicy;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use mediadrop_core::StorageConfig;

/// S3 storage implementation
///
/// Serves both AWS S3 and DigitalOcean Spaces; Spaces is reached through its
/// S3-compatible endpoint.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Credentials come from `ACCESS_KEY_ID` / `SECRET_ACCESS_KEY` in the storage
    /// configuration rather than the AWS credential chain. Retries are disabled:
    /// a failed put is reported to the caller as is.
    pub async fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "mediadrop-env",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let endpoint_url = config.endpoint_url();
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(ref endpoint) = endpoint_url {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        tracing::debug!(
            provider = %config.provider,
            region = %config.region,
            endpoint = ?endpoint_url,
            "S3 client configured"
        );

        S3Storage {
            client: Client::from_conf(s3_config_builder.build()),
        }
    }
}

fn canned_acl(policy: AccessPolicy) -> ObjectCannedAcl {
    match policy {
        AccessPolicy::PublicRead => ObjectCannedAcl::PublicRead,
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put_object(&self, request: PutObject) -> StorageResult<()> {
        let PutObject {
            bucket,
            key,
            body,
            content_type,
            access_policy,
        } = request;
        let size = body.len() as u64;
        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type(&content_type)
            .acl(canned_acl(access_policy))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(DisplayErrorContext(&e).to_string())
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            acl = %access_policy,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }
}
