//! Converter component - the request lifecycle core and its view
//!
//! `types` and `logic` hold the state machine that gates submission; `view`
//! is the Dioxus component wiring signals to those transitions; `styles`
//! carries the CSS.

pub mod logic;
pub mod styles;
pub mod types;
pub mod view;

pub use view::ConverterApp;
