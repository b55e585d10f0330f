//! Conversion endpoint
//!
//! Mirrors the wire contract exactly: missing `text` is a 400 with a fixed
//! message, blank text short-circuits to an empty conversion, and engine
//! failures become 500s with an `error` body the client can surface verbatim.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use shared_types::{ApiErrorBody, ConvertRequest, ConvertResponse, DEFAULT_SLANG_LEVEL};

use crate::api::ApiState;
use crate::engine::EngineError;

/// Convert submitted text into Gen Z slang at the requested intensity
pub async fn convert_text(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    // Field extraction stays manual so a missing `text` maps to the
    // contract's 400 body instead of a framework rejection.
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiErrorBody::new("No text provided")),
        )
            .into_response();
    };

    if text.trim().is_empty() {
        return (
            StatusCode::OK,
            Json(ConvertResponse {
                converted_text: String::new(),
            }),
        )
            .into_response();
    }

    let slang_level = body
        .get("slangLevel")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_SLANG_LEVEL);
    let request = ConvertRequest::new(text, slang_level);
    let level = request.clamped_level();

    tracing::info!(
        slang_level = level,
        chars = text.len(),
        engine = state.engine.name(),
        "Converting text"
    );

    match state.engine.convert(text, level).await {
        Ok(converted_text) => (
            StatusCode::OK,
            Json(ConvertResponse { converted_text }),
        )
            .into_response(),
        Err(e @ EngineError::GenerationBlocked) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody::new(e.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorBody::new(format!("An error occurred: {e}"))),
            )
                .into_response()
        }
    }
}
