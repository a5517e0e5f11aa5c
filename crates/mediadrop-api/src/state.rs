//! Application state shared by all handlers.
//!
//! Built once at startup and never mutated; handlers receive it through axum `State`.

use mediadrop_core::{StorageConfig, ValidationPolicy};
use mediadrop_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage_config: Arc<StorageConfig>,
    pub validation: ValidationPolicy,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(
        storage_config: StorageConfig,
        validation: ValidationPolicy,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            storage_config: Arc::new(storage_config),
            validation,
            storage,
        }
    }
}
