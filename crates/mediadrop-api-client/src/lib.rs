//! HTTP client for the Mediadrop upload API.
//!
//! Provides [`ApiClient`] for posting files to `POST /api/upload` and the
//! [`uploader`] widget that drives uploads from a user interface.

pub mod preview;
pub mod uploader;

use anyhow::{Context, Result};
use async_trait::async_trait;
use mediadrop_core::error::UPLOAD_FAILED_MESSAGE;
use mediadrop_core::UploadResult;
use reqwest::Client;
use serde::Deserialize;

pub use uploader::{
    reduce, DisplayedFile, FilePicker, SelectedFile, UploadTransport, Uploader, UploaderEvent,
    UploaderPhase, UploaderState,
};

/// Path of the upload route on the server.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Either response shape of the upload route.
#[derive(Debug, Deserialize)]
struct UploadReply {
    #[serde(default)]
    success: bool,
    src: Option<String>,
    error: Option<String>,
}

impl From<UploadReply> for UploadResult {
    fn from(reply: UploadReply) -> Self {
        match reply {
            UploadReply {
                success: true,
                src: Some(url),
                ..
            } => UploadResult::Success { url },
            UploadReply { error, .. } => UploadResult::Failure {
                error_message: error.unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()),
            },
        }
    }
}

/// Interpret a response body from the upload route, whatever its status.
pub fn parse_upload_reply(body: &[u8]) -> UploadResult {
    match serde_json::from_slice::<UploadReply>(body) {
        Ok(reply) => reply.into(),
        Err(e) => {
            tracing::debug!(error = %e, "Upload response is not valid JSON");
            UploadResult::Failure {
                error_message: UPLOAD_FAILED_MESSAGE.to_string(),
            }
        }
    }
}

/// HTTP client for the upload API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// No request timeout is set; a dropped connection surfaces as a failed upload.
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: MEDIADROP_API_URL (or API_URL).
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("MEDIADROP_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload one file as the multipart field `file`.
    ///
    /// Server-side rejections come back as `UploadResult::Failure` with the server's
    /// message; transport and decoding errors use the generic failure message.
    pub async fn upload_file(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> UploadResult {
        match self.send_upload(file_name, mime_type, bytes).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), file_name, "Upload request failed");
                UploadResult::Failure {
                    error_message: UPLOAD_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    async fn send_upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .with_context(|| format!("Invalid MIME type: {}", mime_type))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.build_url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        tracing::debug!(status = %status, file_name, "Upload response received");

        Ok(parse_upload_reply(&body))
    }
}

#[async_trait]
impl UploadTransport for ApiClient {
    async fn submit(&self, file: SelectedFile) -> UploadResult {
        self.upload_file(&file.name, &file.mime_type, file.bytes.to_vec())
            .await
    }
}
