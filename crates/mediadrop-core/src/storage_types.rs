use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Object storage providers
///
/// Both providers speak the S3 protocol; they differ in endpoint and in how the
/// public URL of a stored object is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageProvider {
    #[default]
    Aws,
    DigitalOcean,
}

impl StorageProvider {
    /// Parse a `STORAGE_SERVICE` value. Anything other than `DIGITALOCEAN`
    /// (case-insensitive) selects AWS.
    pub fn from_service_name(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("digitalocean") {
            StorageProvider::DigitalOcean
        } else {
            StorageProvider::Aws
        }
    }

    /// Registrable domain that public object URLs live under.
    pub fn url_part(&self) -> &'static str {
        match self {
            StorageProvider::Aws => "amazonaws.com",
            StorageProvider::DigitalOcean => "digitaloceanspaces.com",
        }
    }

    /// Service label placed between region and [`url_part`](Self::url_part).
    pub fn subdomain(&self) -> &'static str {
        match self {
            StorageProvider::Aws => "s3",
            StorageProvider::DigitalOcean => "cdn",
        }
    }
}

impl Display for StorageProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageProvider::Aws => write!(f, "AWS"),
            StorageProvider::DigitalOcean => write!(f, "DIGITALOCEAN"),
        }
    }
}

/// Canned ACL applied to an uploaded object. Uploads are always readable by
/// anonymous GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    PublicRead,
}

impl Display for AccessPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AccessPolicy::PublicRead => write!(f, "public-read"),
        }
    }
}

/// How storage keys are derived from the uploaded file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageKeyStrategy {
    /// `{epoch_millis}-{file_name}`
    #[default]
    Timestamp,
    /// `{epoch_millis}-{uuid}-{file_name}`
    Unique,
}

impl FromStr for StorageKeyStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timestamp" => Ok(StorageKeyStrategy::Timestamp),
            "unique" | "uuid" => Ok(StorageKeyStrategy::Unique),
            _ => Err(anyhow::anyhow!("Invalid storage key strategy: {}", s)),
        }
    }
}
