//! Multipart extraction for the upload route

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::Multipart;
use axum::http::StatusCode;
use mediadrop_core::{AppError, UploadRequest};

use crate::constants::FILE_FIELD;

/// File name used when the part carries none (matches what browsers send for blobs).
const DEFAULT_FILE_NAME: &str = "blob";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Read the first multipart field named `file` fully into memory.
///
/// Returns `Ok(None)` when the form has no such field. Fields before it are skipped;
/// anything after it is left unread. `max_size_bytes` is the configured file limit,
/// reported when the body is cut off by the transport limit.
pub async fn extract_multipart_file(
    multipart: Result<Multipart, MultipartRejection>,
    max_size_bytes: Option<u64>,
) -> Result<Option<UploadRequest>, AppError> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::InvalidMultipart(rejection.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_size_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_size_bytes))?;

        return Ok(Some(UploadRequest::new(file_name, content_type, data)));
    }

    Ok(None)
}

fn multipart_error(error: MultipartError, max_size_bytes: Option<u64>) -> AppError {
    match max_size_bytes {
        Some(limit) if error.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::BodyTooLarge { limit }
        }
        _ => AppError::InvalidMultipart(error.body_text()),
    }
}
