//! Local previews derived from raw file bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build a `data:` URL for the file so it can be shown before the upload completes.
pub fn local_preview_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
