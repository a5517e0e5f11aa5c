//! API constants

/// Multipart upload route
pub const UPLOAD_PATH: &str = "/api/upload";

/// Served OpenAPI document
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Name of the multipart field carrying the file
pub const FILE_FIELD: &str = "file";
