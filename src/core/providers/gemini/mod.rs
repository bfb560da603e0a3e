//! Google Gemini Provider
//!
//! Serves chat completions through the Google AI Studio `generateContent` API.
//! The conversation is flattened into a single prompt and generated with fixed
//! safety thresholds.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

// Re-export main types
pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
pub use provider::GeminiProvider;
