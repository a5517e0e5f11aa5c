//! Upload validation policy
//!
//! Both limits are optional. An absent limit skips its check entirely, and an empty
//! allowed-type list is treated the same as no list.

use crate::error::AppError;
use crate::models::UploadRequest;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size and content type limits applied to every upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_size_bytes: Option<u64>,
    pub allowed_types: Option<Vec<String>>,
}

impl ValidationPolicy {
    pub fn new(max_size_bytes: Option<u64>, allowed_types: Option<Vec<String>>) -> Self {
        Self {
            max_size_bytes,
            allowed_types,
        }
    }

    /// A policy that accepts every file.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Run the size check, then the type check.
    pub fn validate(&self, request: &UploadRequest) -> Result<(), AppError> {
        self.validate_size(request.size_bytes)?;
        self.validate_content_type(&request.mime_type)
    }

    pub fn validate_size(&self, size_bytes: u64) -> Result<(), AppError> {
        match self.max_size_bytes {
            Some(limit) if size_bytes > limit => Err(AppError::FileTooLarge {
                size: size_bytes,
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Exact membership test; no normalization of the MIME type.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), AppError> {
        match self.allowed_types.as_deref() {
            Some(allowed) if !allowed.is_empty() && !allowed.iter().any(|t| t == content_type) => {
                Err(AppError::UnsupportedType {
                    content_type: content_type.to_string(),
                    allowed: allowed.to_vec(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Render a byte count as megabytes the way it appears in user-facing messages:
/// whole numbers without a fraction (`10`), other values in shortest form (`0.5`).
pub fn format_megabytes(bytes: u64) -> String {
    format!("{}", bytes as f64 / BYTES_PER_MB)
}
