//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p mediadrop-api --test upload_test`.

pub mod fixtures;
pub mod storage;

use axum_test::TestServer;
use mediadrop_api::setup::routes;
use mediadrop_api::AppState;
use mediadrop_core::Config;
use mediadrop_storage::Storage;
use std::sync::Arc;

pub use storage::{FailingStorage, RecordingStorage};

/// Test application: server plus the storage double behind it.
pub struct TestApp<S> {
    pub server: TestServer,
    pub storage: Arc<S>,
}

impl<S> TestApp<S> {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Build a configuration from explicit variables only (no process environment).
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("Failed to build test config")
}

/// Setup a test app with the given configuration and storage double.
pub fn setup_test_app_with<S>(config: Config, storage: Arc<S>) -> TestApp<S>
where
    S: Storage + 'static,
{
    let state = Arc::new(AppState::new(
        config.storage.clone(),
        config.validation.clone(),
        storage.clone() as Arc<dyn Storage>,
    ));
    let router = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp { server, storage }
}

/// Setup a test app with default limits (10MB; jpeg, png, gif) and recording storage.
pub fn setup_test_app() -> TestApp<RecordingStorage> {
    setup_test_app_with(
        test_config(&[("BUCKET_NAME", "b"), ("REGION", "r")]),
        Arc::new(RecordingStorage::default()),
    )
}
