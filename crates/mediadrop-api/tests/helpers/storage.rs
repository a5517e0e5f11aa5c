//! Storage doubles for integration tests.

use async_trait::async_trait;
use mediadrop_storage::{PutObject, Storage, StorageError, StorageResult};
use std::sync::Mutex;

/// Records every put-object call and always succeeds.
#[derive(Default)]
pub struct RecordingStorage {
    calls: Mutex<Vec<PutObject>>,
}

impl RecordingStorage {
    pub fn calls(&self) -> Vec<PutObject> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn put_object(&self, request: PutObject) -> StorageResult<()> {
        self.calls.lock().unwrap().push(request);
        Ok(())
    }
}

/// Fails every put-object call with the given message.
pub struct FailingStorage {
    pub message: String,
}

#[async_trait]
impl Storage for FailingStorage {
    async fn put_object(&self, _request: PutObject) -> StorageResult<()> {
        Err(StorageError::UploadFailed(self.message.clone()))
    }
}
