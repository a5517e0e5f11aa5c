//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediadrop_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediadrop API",
        version = "0.1.0",
        description = "Single-file upload to S3-compatible object storage (AWS S3 or DigitalOcean Spaces). Uploaded objects are public-read and returned as a public URL."
    ),
    paths(handlers::upload::upload_file),
    components(schemas(models::UploadResponse, error::ErrorResponse)),
    tags((name = "upload", description = "File upload"))
)]
pub struct ApiDoc;
