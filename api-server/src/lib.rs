//! GenZify API server - HTTP front for the slang conversion engine
//!
//! This crate exposes the conversion wire contract (`POST /api/convert`) and
//! delegates the actual text transformation to a pluggable engine: Gemini
//! when an API key is configured, canned mock output otherwise.

pub mod api;
pub mod engine;
