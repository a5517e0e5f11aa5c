//! Uploader widget
//!
//! Holds the state behind a single upload control: a local preview while the file is in
//! flight, then either the stored file's public URL or the server's error text. State
//! transitions go through [`reduce`]; [`Uploader`] wires them to a file picker, an
//! [`UploadTransport`] and a `watch` channel that parents subscribe to.
//!
//! Submissions are not fenced: when several are in flight, whichever resolves last
//! decides the final state.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use mediadrop_core::error::UPLOAD_FAILED_MESSAGE;
use mediadrop_core::UploadResult;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::preview::local_preview_url;

/// File chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploaderState {
    pub preview_url: String,
    pub error_message: String,
    pub is_loading: bool,
}

/// What the widget shows. Exactly one of these is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayedFile<'a> {
    Error(&'a str),
    Preview(&'a str),
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploaderPhase {
    Idle,
    PreviewPending,
    Success,
    Failed,
}

impl UploaderState {
    pub fn display(&self) -> DisplayedFile<'_> {
        if !self.error_message.is_empty() {
            DisplayedFile::Error(&self.error_message)
        } else if !self.preview_url.is_empty() {
            DisplayedFile::Preview(&self.preview_url)
        } else {
            DisplayedFile::Placeholder
        }
    }

    pub fn phase(&self) -> UploaderPhase {
        if self.is_loading {
            UploaderPhase::PreviewPending
        } else if !self.error_message.is_empty() {
            UploaderPhase::Failed
        } else if !self.preview_url.is_empty() {
            UploaderPhase::Success
        } else {
            UploaderPhase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploaderEvent {
    FileSelected { preview_url: String },
    SubmissionResolved(UploadResult),
}

/// Apply one event to the widget state.
pub fn reduce(state: &UploaderState, event: UploaderEvent) -> UploaderState {
    match event {
        UploaderEvent::FileSelected { preview_url } => UploaderState {
            preview_url,
            error_message: String::new(),
            is_loading: true,
        },
        UploaderEvent::SubmissionResolved(UploadResult::Success { url }) => UploaderState {
            preview_url: url,
            error_message: String::new(),
            is_loading: false,
        },
        UploaderEvent::SubmissionResolved(UploadResult::Failure { error_message }) => {
            // An empty message would leave the failure invisible.
            let error_message = if error_message.is_empty() {
                UPLOAD_FAILED_MESSAGE.to_string()
            } else {
                error_message
            };
            UploaderState {
                preview_url: state.preview_url.clone(),
                error_message,
                is_loading: false,
            }
        }
    }
}

/// Sends a selected file to the server.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn submit(&self, file: SelectedFile) -> UploadResult;
}

/// Native file chooser behind the widget's click target.
pub trait FilePicker: Send + Sync {
    /// Forget the previous selection so choosing the same file again is reported.
    fn clear(&self);
    fn open(&self);
}

type FileChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

pub struct Uploader {
    state: Arc<watch::Sender<UploaderState>>,
    transport: Arc<dyn UploadTransport>,
    picker: Arc<dyn FilePicker>,
    on_file_change: Option<FileChangeCallback>,
}

impl Uploader {
    pub fn new(transport: Arc<dyn UploadTransport>, picker: Arc<dyn FilePicker>) -> Self {
        let (state, _) = watch::channel(UploaderState::default());
        Self {
            state: Arc::new(state),
            transport,
            picker,
            on_file_change: None,
        }
    }

    /// Called with the public URL after each successful upload.
    pub fn with_on_file_change(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_file_change = Some(Arc::new(callback));
        self
    }

    pub fn state(&self) -> UploaderState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UploaderState> {
        self.state.subscribe()
    }

    /// Open the picker unless an upload is in flight. Returns whether it was opened.
    pub fn click(&self) -> bool {
        if self.state.borrow().is_loading {
            tracing::debug!("Ignoring click while upload is in progress");
            return false;
        }
        self.picker.clear();
        self.picker.open();
        true
    }

    /// Handle a picker change event. Only the first file is used; an empty selection
    /// is ignored.
    pub fn select_files(&self, files: Vec<SelectedFile>) -> Option<JoinHandle<UploadResult>> {
        files.into_iter().next().map(|file| self.select_file(file))
    }

    /// Show a local preview immediately and submit the file in the background.
    ///
    /// Must be called within a Tokio runtime.
    pub fn select_file(&self, file: SelectedFile) -> JoinHandle<UploadResult> {
        let preview_url = local_preview_url(&file.mime_type, &file.bytes);
        self.apply(UploaderEvent::FileSelected { preview_url });

        tracing::debug!(
            file_name = %file.name,
            mime_type = %file.mime_type,
            size_bytes = file.bytes.len(),
            "Submitting file"
        );

        let state = Arc::clone(&self.state);
        let transport = Arc::clone(&self.transport);
        let on_file_change = self.on_file_change.clone();

        tokio::spawn(async move {
            let result = transport.submit(file).await;

            state.send_modify(|current| {
                *current = reduce(current, UploaderEvent::SubmissionResolved(result.clone()));
            });

            match &result {
                UploadResult::Success { url } => {
                    tracing::info!(src = %url, "Upload succeeded");
                    if let Some(callback) = on_file_change {
                        callback(url);
                    }
                }
                UploadResult::Failure { error_message } => {
                    tracing::warn!(error = %error_message, "Upload failed");
                }
            }

            result
        })
    }

    fn apply(&self, event: UploaderEvent) {
        self.state
            .send_modify(|current| *current = reduce(current, event));
    }
}
