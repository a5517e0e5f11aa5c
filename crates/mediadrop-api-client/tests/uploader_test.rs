//! Uploader widget against a live server.
//!
//! Run with: `cargo test -p mediadrop-api-client --test uploader_test`
//! The API router is served on an ephemeral local port with in-memory storage.

use async_trait::async_trait;
use mediadrop_api::setup::routes;
use mediadrop_api::AppState;
use mediadrop_api_client::{
    ApiClient, DisplayedFile, FilePicker, SelectedFile, Uploader, UploaderPhase,
};
use mediadrop_core::{Config, UploadResult};
use mediadrop_storage::{PutObject, Storage, StorageResult};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct MemoryStorage {
    keys: Mutex<Vec<String>>,
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put_object(&self, request: PutObject) -> StorageResult<()> {
        self.keys.lock().unwrap().push(request.key);
        Ok(())
    }
}

struct NoopPicker;

impl FilePicker for NoopPicker {
    fn clear(&self) {}
    fn open(&self) {}
}

async fn spawn_server(storage: Arc<MemoryStorage>) -> String {
    let config = Config::from_lookup(|key| match key {
        "BUCKET_NAME" => Some("b".to_string()),
        "REGION" => Some("r".to_string()),
        "MAX_FILE_SIZE_MB" => Some("1".to_string()),
        _ => None,
    })
    .expect("config");
    let state = Arc::new(AppState::new(
        config.storage.clone(),
        config.validation.clone(),
        storage as Arc<dyn Storage>,
    ));
    let router = routes::setup_routes(&config, state).expect("routes");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_upload_file_returns_public_url() {
    let storage = Arc::new(MemoryStorage::default());
    let base_url = spawn_server(storage.clone()).await;
    let client = ApiClient::new(base_url).unwrap();

    let result = client
        .upload_file("cat.png", "image/png", vec![0x89, 0x50, 0x4E, 0x47])
        .await;

    let key = storage.keys.lock().unwrap()[0].clone();
    assert_eq!(
        result,
        UploadResult::Success {
            url: format!("https://b.r.s3.amazonaws.com/{}", key)
        }
    );
}

#[tokio::test]
async fn test_upload_file_surfaces_server_message() {
    let storage = Arc::new(MemoryStorage::default());
    let base_url = spawn_server(storage.clone()).await;
    let client = ApiClient::new(base_url).unwrap();

    let result = client
        .upload_file("notes.txt", "text/plain", b"hello".to_vec())
        .await;

    assert_eq!(
        result,
        UploadResult::Failure {
            error_message:
                "File type not allowed. Allowed types: image/jpeg, image/png, image/gif"
                    .to_string()
        }
    );
    assert!(storage.keys.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_widget_round_trip() {
    let storage = Arc::new(MemoryStorage::default());
    let base_url = spawn_server(storage.clone()).await;
    let client = Arc::new(ApiClient::new(base_url).unwrap());

    let changed = Arc::new(Mutex::new(None::<String>));
    let sink = changed.clone();
    let uploader = Uploader::new(client, Arc::new(NoopPicker))
        .with_on_file_change(move |url| *sink.lock().unwrap() = Some(url.to_string()));

    let handle = uploader.select_file(SelectedFile::new("a.gif", "image/gif", b"GIF89a".to_vec()));
    assert_eq!(uploader.state().phase(), UploaderPhase::PreviewPending);
    handle.await.unwrap();

    let state = uploader.state();
    assert_eq!(state.phase(), UploaderPhase::Success);
    let url = changed.lock().unwrap().clone().expect("callback invoked");
    assert_eq!(state.display(), DisplayedFile::Preview(&url));
    assert!(url.ends_with("-a.gif"));

    // Over the 1MB limit: the server's message replaces the preview.
    let big = vec![0u8; 2 * 1024 * 1024];
    let handle = uploader.select_file(SelectedFile::new("big.png", "image/png", big));
    handle.await.unwrap();
    assert_eq!(
        uploader.state().display(),
        DisplayedFile::Error("File size exceeds 1MB limit.")
    );
    assert_eq!(storage.keys.lock().unwrap().len(), 1);
}
