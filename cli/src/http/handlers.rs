use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use rigscan_common::scan::{
    DEFAULT_END, DEFAULT_START, DEFAULT_TIMEOUT_MS, DEFAULT_WORKERS, ScanRequest, ScanResponse,
};
use serde_json::{Value, json};
use tracing::debug;

use super::{ApiError, AppState};

type Params = HashMap<String, String>;

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn scan(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<ScanResponse>, ApiError> {
    let request: ScanRequest = request_from_params(&params, &state.default_base);
    debug!("Scan requested: {request:?}");

    let response: ScanResponse = state.service.scan(request).await?;
    Ok(Json(response))
}

/// Builds a request from query parameters. Anything missing, empty or not
/// an integer falls back to its default.
fn request_from_params(params: &Params, default_base: &str) -> ScanRequest {
    let base: String = match params.get("base") {
        Some(base) if !base.is_empty() => base.clone(),
        _ => default_base.to_string(),
    };

    ScanRequest {
        base,
        start: query_int(params, "start", DEFAULT_START),
        end: query_int(params, "end", DEFAULT_END),
        timeout_ms: query_int(params, "timeout_ms", DEFAULT_TIMEOUT_MS),
        workers: query_int(params, "workers", DEFAULT_WORKERS),
    }
}

fn query_int(params: &Params, key: &str, default: i64) -> i64 {
    params
        .get(key)
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
