//! HTTP transport for the scan service.
//!
//! Routes:
//! * `GET /health`
//! * `GET /miners/scan?base=&start=&end=&timeout_ms=&workers=`
//! * `GET /scan` (older clients, same handler)

use std::sync::Arc;

use axum::{Router, routing::get};
use rigscan_core::ScanService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod error;
mod handlers;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub service: ScanService,
    pub default_base: Arc<str>,
}

impl AppState {
    pub fn new(service: ScanService, default_base: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            default_base: default_base.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/miners/scan", get(handlers::scan))
        .route("/scan", get(handlers::scan))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
