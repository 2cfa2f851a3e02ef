//! Content scan routes.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use campusguard_scan::Moderator;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/scan", post(scan_content))
}

pub fn function_routes() -> Router<Arc<AppState>> {
    Router::new().route("/functions/v1/ai-scan-content", post(scan_content))
}

/// POST /api/scan — validate and moderate `{ content, type }`.
async fn scan_content(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    scan_body(&state.moderator, &body).map(Json)
}

/// Shared by the HTTP handler and the `scan` CLI command.
///
/// A body that is not JSON at all counts as an unexpected failure, not a
/// validation error, matching what existing clients receive.
pub fn scan_body(moderator: &Moderator, body: &[u8]) -> Result<serde_json::Value, ApiError> {
    let request: serde_json::Value = serde_json::from_slice(body)?;
    let outcome = moderator.moderate_request(&request)?;

    info!(
        status = %outcome.verdict.status,
        category = outcome.keywords.category_label(),
        matches = outcome.keywords.match_count,
        has_pii = outcome.pii.has_pii,
        "Content scanned"
    );

    Ok(serde_json::json!({
        "success": true,
        "result": outcome.report(),
    }))
}
