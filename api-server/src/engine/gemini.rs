//! Gemini-backed conversion engine
//!
//! One `generateContent` call per conversion. Non-2xx statuses and unusable
//! bodies are mapped into `EngineError` so the API layer never sees raw
//! provider failures.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::prompt::build_prompt;
use super::{ConvertEngine, EngineError};

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: i32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: String,
    threshold: String,
}

pub struct GeminiEngine {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiEngine {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{GEMINI_BASE}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key
        )
    }

    fn request_body(prompt: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens: 1024,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: (*category).to_string(),
                    threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ConvertEngine for GeminiEngine {
    async fn convert(&self, text: &str, slang_level: u8) -> Result<String, EngineError> {
        let prompt = build_prompt(text, slang_level);

        let response = self
            .http
            .post(self.endpoint())
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| EngineError::ProviderRequest("gemini".to_string(), e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EngineError::ProviderRequest("gemini".to_string(), e.to_string()))?;

        if !status.is_success() {
            return Err(EngineError::ProviderRequest(
                "gemini".to_string(),
                format!("status {status}: {body}"),
            ));
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| EngineError::ProviderParse("gemini".to_string(), e.to_string()))?;

        match extract_candidate_text(&json) {
            Some(converted) => Ok(converted),
            None => Err(EngineError::GenerationBlocked),
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Pull the generated text out of a `generateContent` response. Returns None
/// when the response carries no usable candidate (safety block, empty parts).
fn extract_candidate_text(json: &Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("");

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
