//! Health, policy and crisis-resource routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use campusguard_scan::crisis_resources;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/policy", get(get_policy))
        .route("/crisis-resources", get(get_crisis_resources))
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/policy — active thresholds, limits and category sizes.
async fn get_policy(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.moderator.policy().summary())
}

/// GET /api/crisis-resources
async fn get_crisis_resources() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "resources": crisis_resources() }))
}
