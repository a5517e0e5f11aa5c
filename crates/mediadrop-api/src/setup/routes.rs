//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::constants::{OPENAPI_PATH, UPLOAD_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use mediadrop_core::{Config, ValidationPolicy};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Transport-level body limit as a multiple of the configured file size limit.
///
/// Oversized files must still reach the handler so the client gets the size message
/// instead of a bare 413.
const BODY_LIMIT_FACTOR: u64 = 4;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let body_limit = body_limit(&config.validation);

    let app = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::upload_file))
        .layer(body_limit)
        .route("/health", get(handlers::health::health_check))
        .route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_PATH).path("/docs"))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn body_limit(policy: &ValidationPolicy) -> DefaultBodyLimit {
    match policy.max_size_bytes {
        Some(max) => {
            let limit = max.saturating_mul(BODY_LIMIT_FACTOR);
            DefaultBodyLimit::max(usize::try_from(limit).unwrap_or(usize::MAX))
        }
        None => DefaultBodyLimit::disable(),
    }
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origins = &config.server.cors_origins;
    let cors = if origins.iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS_ORIGINS entry: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
