use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use mediadrop_core::{public_url, AccessPolicy, AppError, UploadResponse};
use mediadrop_storage::{generate_storage_key, PutObject};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Upload file handler
///
/// Validates the multipart `file` field against the configured size and type limits,
/// stores it with a public-read ACL and returns its public URL.
///
/// # Errors
/// - `AppError::InvalidMultipart` - not a multipart body, or a malformed one (400)
/// - `AppError::NoFile` - no `file` field in the form (400)
/// - `AppError::FileTooLarge` / `AppError::BodyTooLarge` - file exceeds the size limit (400)
/// - `AppError::UnsupportedType` - MIME type not in the allowed set (400)
/// - `AppError::Storage` - the put-object call failed (500)
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Malformed form, or missing, oversized or disallowed file", body = ErrorResponse),
        (status = 500, description = "Storage upload failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), HttpAppError> {
    tracing::info!("Request to upload file received");

    let request = extract_multipart_file(multipart, state.validation.max_size_bytes)
        .await?
        .ok_or(AppError::NoFile)?;

    tracing::info!(
        file_name = %request.file_name,
        content_type = %request.mime_type,
        size_bytes = request.size_bytes,
        "Received file"
    );

    state.validation.validate(&request)?;

    let config = &state.storage_config;
    let key = generate_storage_key(config.key_strategy, &request.file_name);

    state
        .storage
        .put_object(PutObject {
            bucket: config.bucket.clone(),
            key: key.clone(),
            body: request.file_bytes,
            content_type: request.mime_type,
            access_policy: AccessPolicy::PublicRead,
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key = %key, "Error uploading file");
            e
        })?;

    let src = public_url(config, &key);

    tracing::info!(key = %key, src = %src, "File uploaded successfully");

    Ok((StatusCode::CREATED, Json(UploadResponse::created(src))))
}
