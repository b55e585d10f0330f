//! Conversion engines
//!
//! A `ConvertEngine` turns plain text into Gen Z slang at a given intensity.
//! `GeminiEngine` does the real work via the Gemini REST API; `MockEngine`
//! keeps the whole stack runnable without credentials.

use async_trait::async_trait;

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiEngine;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("provider request failed ({0}): {1}")]
    ProviderRequest(String, String),
    #[error("provider response parse failed ({0}): {1}")]
    ProviderParse(String, String),
    #[error("Content generation failed or was blocked. Try rephrasing your input.")]
    GenerationBlocked,
}

#[async_trait]
pub trait ConvertEngine: Send + Sync {
    /// Convert `text` into slang at `slang_level` (already clamped to 0-100).
    async fn convert(&self, text: &str, slang_level: u8) -> Result<String, EngineError>;

    /// Short engine name for logs.
    fn name(&self) -> &'static str;
}

/// Keyless fallback engine returning canned conversions, tiered by level so
/// the UI slider still has visible effect in local development.
pub struct MockEngine;

#[async_trait]
impl ConvertEngine for MockEngine {
    async fn convert(&self, text: &str, slang_level: u8) -> Result<String, EngineError> {
        let converted = match slang_level {
            0..=25 => format!("This is the light GenZ version: {text}"),
            26..=50 => format!("Ngl, here's that text but make it GenZ: {text}"),
            51..=75 => format!("Fr fr, your text is giving: {text}"),
            _ => format!("OMG bestie! ur text is bussin no cap: {text}"),
        };
        Ok(converted)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_engine_tiers_follow_level() {
        let engine = MockEngine;

        let light = engine.convert("hello", 10).await.unwrap();
        assert!(light.starts_with("This is the light"));

        let moderate = engine.convert("hello", 50).await.unwrap();
        assert!(moderate.starts_with("Ngl"));

        let strong = engine.convert("hello", 75).await.unwrap();
        assert!(strong.starts_with("Fr fr"));

        let maximum = engine.convert("hello", 100).await.unwrap();
        assert!(maximum.starts_with("OMG bestie"));
    }

    #[tokio::test]
    async fn mock_engine_echoes_input_text() {
        let engine = MockEngine;
        let out = engine.convert("quarterly report", 40).await.unwrap();
        assert!(out.ends_with("quarterly report"));
    }
}
