//! Shared types between frontend and backend
//!
//! These types define the JSON wire contract for the conversion API and are
//! used by both:
//! - The axum API server (native Rust)
//! - The Dioxus converter UI (WASM)

use serde::{Deserialize, Serialize};

/// Default slang level applied when the client omits the field.
pub const DEFAULT_SLANG_LEVEL: i64 = 50;

/// Request body for `POST /api/convert`.
///
/// `slang_level` is accepted as any integer and clamped into `[0, 100]` by
/// the server, so sloppy clients (an out-of-range slider, a scripted call)
/// still get a usable conversion instead of a rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertRequest {
    pub text: String,

    #[serde(rename = "slangLevel", default = "default_slang_level")]
    pub slang_level: i64,
}

fn default_slang_level() -> i64 {
    DEFAULT_SLANG_LEVEL
}

impl ConvertRequest {
    pub fn new(text: impl Into<String>, slang_level: i64) -> Self {
        Self {
            text: text.into(),
            slang_level,
        }
    }

    /// Slang level clamped into the supported `[0, 100]` range.
    pub fn clamped_level(&self) -> u8 {
        self.slang_level.clamp(0, 100) as u8
    }
}

/// Success body for `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertResponse {
    pub converted_text: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
