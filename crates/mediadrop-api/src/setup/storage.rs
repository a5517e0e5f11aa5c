//! Storage backend setup

use anyhow::{Context, Result};
use mediadrop_core::{public_domain, Config};
use mediadrop_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the storage client once for the process lifetime.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage_config = &config.storage;

    if storage_config.access_key_id.is_empty() || storage_config.secret_access_key.is_empty() {
        tracing::warn!("ACCESS_KEY_ID or SECRET_ACCESS_KEY not set; uploads will be rejected by the provider");
    }

    let storage = create_storage(storage_config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        provider = %storage_config.provider,
        bucket = %storage_config.bucket,
        region = %storage_config.region,
        public_domain = %public_domain(storage_config),
        "Storage backend initialized"
    );

    Ok(storage)
}
