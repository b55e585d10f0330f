//! HTTP API routes for the GenZify conversion service

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

pub mod convert;

use crate::engine::ConvertEngine;

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<dyn ConvertEngine>,
}

/// Configure all API routes
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/convert", post(convert::convert_text))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "genzify-api"
    }))
}
