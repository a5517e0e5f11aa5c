//! Shared key generation for storage backends.

use chrono::Utc;
use mediadrop_core::StorageKeyStrategy;
use uuid::Uuid;

/// Generate a storage key for `file_name` stamped with the current time.
pub fn generate_storage_key(strategy: StorageKeyStrategy, file_name: &str) -> String {
    generate_storage_key_at(strategy, Utc::now().timestamp_millis(), file_name)
}

/// Generate a storage key for `file_name` stamped with `epoch_millis`.
pub fn generate_storage_key_at(
    strategy: StorageKeyStrategy,
    epoch_millis: i64,
    file_name: &str,
) -> String {
    let name = sanitize_key_component(file_name);
    match strategy {
        StorageKeyStrategy::Timestamp => format!("{}-{}", epoch_millis, name),
        StorageKeyStrategy::Unique => format!("{}-{}-{}", epoch_millis, Uuid::new_v4(), name),
    }
}

/// Replace path separators and control characters so the name stays a single
/// key segment. Everything else passes through unchanged.
pub fn sanitize_key_component(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
