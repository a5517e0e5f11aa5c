//! Mediadrop Core Library
//!
//! This crate provides the domain model, error types, configuration, upload validation
//! and public URL resolution shared by the server, the storage layer and the client.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod urls;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, LogFormat, ServerConfig, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{UploadRequest, UploadResponse, UploadResult};
pub use storage_types::{AccessPolicy, StorageKeyStrategy, StorageProvider};
pub use urls::{public_domain, public_url};
pub use validation::{format_megabytes, ValidationPolicy};
