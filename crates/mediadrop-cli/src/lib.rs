use mediadrop_api_client::{DisplayedFile, FilePicker, UploaderPhase, UploaderState};
use serde::Serialize;
use std::path::Path;

/// Guess a MIME type from the file extension. Unknown extensions are sent as
/// `application/octet-stream`.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// The file is named on the command line, so there is no chooser to open.
pub struct CommandLinePicker;

impl FilePicker for CommandLinePicker {
    fn clear(&self) {}

    fn open(&self) {
        tracing::debug!("File is taken from the command line");
    }
}

/// What the widget ended up showing, as printed by `mediadrop upload`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UploadOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn from_state(state: &UploaderState) -> Self {
        let success = state.phase() == UploaderPhase::Success;
        match state.display() {
            DisplayedFile::Error(message) => Self {
                success,
                src: None,
                error: Some(message.to_string()),
            },
            DisplayedFile::Preview(url) if success => Self {
                success,
                src: Some(url.to_string()),
                error: None,
            },
            _ => Self {
                success,
                src: None,
                error: None,
            },
        }
    }
}

const DEFAULT_LOG_DIRECTIVES: &str = "warn";

/// Filter directives for CLI logging: `RUST_LOG` when set and non-empty, else `warn`.
pub fn log_directives(rust_log: Option<&str>) -> &str {
    rust_log
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_LOG_DIRECTIVES)
}

/// Load `.env`, then initialize tracing for CLI binaries. `RUST_LOG` may be set in `.env`.
pub fn init_from_env() {
    dotenvy::dotenv().ok();

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = tracing_subscriber::EnvFilter::try_new(log_directives(rust_log.as_deref()))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_mime_type_known_extensions() {
        assert_eq!(guess_mime_type(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("pixel.png")), "image/png");
        assert_eq!(guess_mime_type(Path::new("anim.gif")), "image/gif");
    }

    #[test]
    fn guess_mime_type_unknown_extension() {
        assert_eq!(
            guess_mime_type(Path::new("archive.tar.zst")),
            "application/octet-stream"
        );
        assert_eq!(guess_mime_type(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn log_directives_prefer_rust_log() {
        assert_eq!(
            log_directives(Some("mediadrop_api_client=debug")),
            "mediadrop_api_client=debug"
        );
        assert_eq!(log_directives(Some("  ")), "warn");
        assert_eq!(log_directives(None), "warn");
    }

    #[test]
    fn outcome_from_success_state() {
        let state = UploaderState {
            preview_url: "https://b.r.s3.amazonaws.com/1-a.png".to_string(),
            error_message: String::new(),
            is_loading: false,
        };
        let json = serde_json::to_value(UploadOutcome::from_state(&state)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "src": "https://b.r.s3.amazonaws.com/1-a.png"})
        );
    }

    #[test]
    fn outcome_from_failed_state() {
        let state = UploaderState {
            preview_url: "data:image/png;base64,AA==".to_string(),
            error_message: "File size exceeds 10MB limit.".to_string(),
            is_loading: false,
        };
        assert_eq!(
            UploadOutcome::from_state(&state),
            UploadOutcome {
                success: false,
                src: None,
                error: Some("File size exceeds 10MB limit.".to_string()),
            }
        );
    }

    #[test]
    fn outcome_never_reports_local_preview() {
        let state = UploaderState {
            preview_url: "data:image/png;base64,AA==".to_string(),
            error_message: String::new(),
            is_loading: true,
        };
        let outcome = UploadOutcome::from_state(&state);
        assert!(!outcome.success);
        assert!(outcome.src.is_none());
    }
}
