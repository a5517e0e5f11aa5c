//! Configuration module
//!
//! Process-wide settings read once at startup: HTTP server, object storage and upload
//! validation. Values come from the environment (a `.env` file is honoured); empty
//! variables count as unset.

use std::env;
use std::fmt;

use anyhow::Context;

use crate::storage_types::{StorageKeyStrategy, StorageProvider};
use crate::validation::ValidationPolicy;

// Common constants
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SPACES_ENDPOINT: &str = "nyc3.digitaloceanspaces.com";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_BUCKET: &str = "your-bucket-name";
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;
const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Console log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// HTTP server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
}

/// Object storage configuration
#[derive(Clone)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    /// Spaces endpoint host, only used with [`StorageProvider::DigitalOcean`]
    pub spaces_endpoint: String,
    pub bucket: String,
    /// Public host override for uploaded object URLs (custom CDN domain)
    pub domain: Option<String>,
    pub key_strategy: StorageKeyStrategy,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("provider", &self.provider)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("spaces_endpoint", &self.spaces_endpoint)
            .field("bucket", &self.bucket)
            .field("domain", &self.domain)
            .field("key_strategy", &self.key_strategy)
            .finish()
    }
}

impl StorageConfig {
    /// Endpoint URL handed to the S3 client, if the provider needs one.
    pub fn endpoint_url(&self) -> Option<String> {
        match self.provider {
            StorageProvider::Aws => None,
            StorageProvider::DigitalOcean => {
                let endpoint = self.spaces_endpoint.trim_end_matches('/');
                if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
                    Some(endpoint.to_string())
                } else {
                    Some(format!("https://{}", endpoint))
                }
            }
        }
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let key_strategy = match lookup("STORAGE_KEY_STRATEGY") {
            Some(value) => value.parse()?,
            None => StorageKeyStrategy::default(),
        };

        Ok(StorageConfig {
            provider: lookup("STORAGE_SERVICE")
                .map(|s| StorageProvider::from_service_name(&s))
                .unwrap_or_default(),
            access_key_id: lookup("ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: lookup("SECRET_ACCESS_KEY").unwrap_or_default(),
            region: lookup("REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            spaces_endpoint: lookup("SPACES_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_SPACES_ENDPOINT.to_string()),
            bucket: lookup("BUCKET_NAME").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            domain: lookup("DOMAIN"),
            key_strategy,
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub validation: ValidationPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?,
            None => DEFAULT_PORT,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        let max_size_bytes = match lookup("MAX_FILE_SIZE_MB") {
            Some(value) => parse_max_size_mb(&value)?,
            None => Some(DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024),
        };

        let allowed_types = match lookup("ALLOWED_CONTENT_TYPES") {
            Some(value) => parse_allowed_types(&value),
            None => Some(
                DEFAULT_ALLOWED_CONTENT_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        };

        Ok(Config {
            server: ServerConfig {
                port,
                cors_origins,
                environment,
                log_format,
            },
            storage: StorageConfig::from_lookup(&lookup)?,
            validation: ValidationPolicy::new(max_size_bytes, allowed_types),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_max_size_mb(value: &str) -> Result<Option<u64>, anyhow::Error> {
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("unlimited") {
        return Ok(None);
    }
    let mb: u64 = value
        .parse()
        .with_context(|| format!("Invalid MAX_FILE_SIZE_MB value: {}", value))?;
    Ok((mb > 0).then(|| mb.saturating_mul(1024 * 1024)))
}

fn parse_allowed_types(value: &str) -> Option<Vec<String>> {
    if value == "*" || value.eq_ignore_ascii_case("none") {
        return None;
    }
    let types: Vec<String> = value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    (!types.is_empty()).then_some(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.storage.provider, StorageProvider::Aws);
        assert_eq!(config.storage.region, "us-east-1");
        assert_eq!(config.storage.bucket, "your-bucket-name");
        assert_eq!(config.storage.spaces_endpoint, "nyc3.digitaloceanspaces.com");
        assert_eq!(config.storage.access_key_id, "");
        assert_eq!(config.storage.secret_access_key, "");
        assert!(config.storage.domain.is_none());
        assert_eq!(config.storage.key_strategy, StorageKeyStrategy::Timestamp);
        assert_eq!(config.validation.max_size_bytes, Some(10 * 1024 * 1024));
        assert_eq!(
            config.validation.allowed_types.as_deref(),
            Some(
                &[
                    "image/jpeg".to_string(),
                    "image/png".to_string(),
                    "image/gif".to_string()
                ][..]
            )
        );
        assert!(!config.is_production());
    }

    #[test]
    fn test_digitalocean_storage() {
        let config = config_from(&[
            ("STORAGE_SERVICE", "digitalocean"),
            ("SPACES_ENDPOINT", "ams3.digitaloceanspaces.com"),
            ("REGION", "ams3"),
            ("BUCKET_NAME", "assets"),
            ("ACCESS_KEY_ID", "key"),
            ("SECRET_ACCESS_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(config.storage.provider, StorageProvider::DigitalOcean);
        assert_eq!(
            config.storage.endpoint_url().as_deref(),
            Some("https://ams3.digitaloceanspaces.com")
        );
        assert_eq!(config.storage.bucket, "assets");
        assert_eq!(config.storage.access_key_id, "key");
    }

    #[test]
    fn test_unrecognized_provider_defaults_to_aws() {
        let config = config_from(&[("STORAGE_SERVICE", "azure")]).unwrap();
        assert_eq!(config.storage.provider, StorageProvider::Aws);
        assert!(config.storage.endpoint_url().is_none());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("DOMAIN", ""), ("REGION", "  ")]).unwrap();
        assert!(config.storage.domain.is_none());
        assert_eq!(config.storage.region, "us-east-1");
    }

    #[test]
    fn test_validation_limits_can_be_disabled() {
        let config = config_from(&[
            ("MAX_FILE_SIZE_MB", "0"),
            ("ALLOWED_CONTENT_TYPES", "*"),
        ])
        .unwrap();
        assert!(config.validation.max_size_bytes.is_none());
        assert!(config.validation.allowed_types.is_none());

        let config = config_from(&[("MAX_FILE_SIZE_MB", "unlimited")]).unwrap();
        assert!(config.validation.max_size_bytes.is_none());
    }

    #[test]
    fn test_custom_validation_limits() {
        let config = config_from(&[
            ("MAX_FILE_SIZE_MB", "25"),
            ("ALLOWED_CONTENT_TYPES", "application/pdf, image/webp"),
        ])
        .unwrap();
        assert_eq!(config.validation.max_size_bytes, Some(25 * 1024 * 1024));
        assert_eq!(
            config.validation.allowed_types,
            Some(vec!["application/pdf".to_string(), "image/webp".to_string()])
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("MAX_FILE_SIZE_MB", "ten")]).is_err());
        assert!(config_from(&[("STORAGE_KEY_STRATEGY", "random")]).is_err());
    }

    #[test]
    fn test_production_environment() {
        let config = config_from(&[("APP_ENV", "Prod"), ("LOG_FORMAT", "JSON")]).unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.log_format, LogFormat::Json);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config_from(&[("SECRET_ACCESS_KEY", "hunter2")]).unwrap();
        let debug = format!("{:?}", config.storage);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
