//! Mediadrop Storage Library
//!
//! This crate provides the object storage abstraction used by the upload route: the
//! [`Storage`] trait with its single put-object operation, the S3 implementation
//! (AWS S3 and DigitalOcean Spaces), and storage key generation.
//!
//! # Storage key format
//!
//! Keys are flat and start with the epoch-millisecond upload time:
//!
//! - **Timestamp strategy** (default): `{millis}-{file_name}`
//! - **Unique strategy**: `{millis}-{uuid}-{file_name}`
//!
//! Path separators and control characters in the file name are replaced with `_`.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{generate_storage_key, generate_storage_key_at, sanitize_key_component};
pub use mediadrop_core::AccessPolicy;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{PutObject, Storage, StorageError, StorageResult};
