//! Upload request and result types

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned alongside the public URL of a stored file.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully.";

/// A single file received by the upload route, fully buffered in memory.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_bytes: Bytes,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadRequest {
    pub fn new(file_name: String, mime_type: String, file_bytes: Bytes) -> Self {
        let size_bytes = file_bytes.len() as u64;
        Self {
            file_bytes,
            file_name,
            mime_type,
            size_bytes,
        }
    }
}

/// Outcome of one upload submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success { url: String },
    Failure { error_message: String },
}

impl UploadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadResult::Success { .. })
    }
}

/// Response body for a stored file (HTTP 201)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// Public URL of the stored object
    pub src: String,
}

impl UploadResponse {
    pub fn created(src: String) -> Self {
        Self {
            success: true,
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            src,
        }
    }
}
