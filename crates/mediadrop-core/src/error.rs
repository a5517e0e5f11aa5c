//! Error types module
//!
//! All upload failures are unified under [`AppError`]. Each variant describes how it is
//! presented to HTTP clients through the [`ErrorMetadata`] trait: validation errors carry
//! user-facing messages, storage faults are reported generically and only
//! logged in detail.

use crate::validation::format_megabytes;

/// Client-facing message for any storage-layer fault.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file.";

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "FILE_TOO_LARGE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No files received.")]
    NoFile,

    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// The request body was cut off by the transport limit before the file was read.
    #[error("Request body exceeds the transport limit (file limit {limit} bytes)")]
    BodyTooLarge { limit: u64 },

    #[error("Unsupported content type '{content_type}', allowed: {allowed:?}")]
    UnsupportedType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::NoFile
            | AppError::InvalidMultipart(_)
            | AppError::FileTooLarge { .. }
            | AppError::BodyTooLarge { .. }
            | AppError::UnsupportedType { .. } => 400,
            AppError::Storage(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::NoFile => "NO_FILE",
            AppError::InvalidMultipart(_) => "INVALID_MULTIPART",
            AppError::FileTooLarge { .. } | AppError::BodyTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            AppError::Storage(_) => "UPLOAD_FAILED",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::NoFile => "No files received.".to_string(),
            AppError::InvalidMultipart(_) => "Invalid multipart form data.".to_string(),
            AppError::FileTooLarge { limit, .. } | AppError::BodyTooLarge { limit } => {
                format!("File size exceeds {}MB limit.", format_megabytes(*limit))
            }
            AppError::UnsupportedType { allowed, .. } => {
                format!("File type not allowed. Allowed types: {}", allowed.join(", "))
            }
            AppError::Storage(_) => UPLOAD_FAILED_MESSAGE.to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFile
            | AppError::FileTooLarge { .. }
            | AppError::UnsupportedType { .. } => LogLevel::Debug,
            AppError::InvalidMultipart(_) | AppError::BodyTooLarge { .. } => LogLevel::Warn,
            AppError::Storage(_) => LogLevel::Error,
        }
    }
}
