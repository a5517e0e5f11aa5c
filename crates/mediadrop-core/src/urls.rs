//! Public URL resolution for stored objects

use crate::config::StorageConfig;

/// Host serving uploaded objects: the configured custom domain, or
/// `{bucket}.{region}.{subdomain}.{url_part}` for the provider.
pub fn public_domain(config: &StorageConfig) -> String {
    match config.domain.as_deref() {
        Some(domain) if !domain.is_empty() => domain.to_string(),
        _ => format!(
            "{}.{}.{}.{}",
            config.bucket,
            config.region,
            config.provider.subdomain(),
            config.provider.url_part()
        ),
    }
}

/// Public HTTPS URL of the object stored under `key`. The key is used verbatim.
pub fn public_url(config: &StorageConfig, key: &str) -> String {
    format!("https://{}/{}", public_domain(config), key)
}
