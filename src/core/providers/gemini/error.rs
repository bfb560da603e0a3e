//! Gemini Error Handling

use crate::core::providers::unified_provider::{GenerationFailure, ProviderError};

/// Maps Gemini HTTP answers and finish reasons onto `ProviderError`
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Error for a non-success HTTP answer
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        let message = Self::extract_message(body).unwrap_or_else(|| body.to_string());

        match status {
            401 | 403 => ProviderError::authentication("gemini", message),
            // AI Studio reports a bad key as 400 INVALID_ARGUMENT with this reason
            400 if body.contains("API_KEY_INVALID") => {
                ProviderError::authentication("gemini", message)
            }
            _ => ProviderError::upstream("gemini", status, message),
        }
    }

    /// Classify a response that carried no usable text
    pub fn empty_output(finish_reason: Option<&str>, block_reason: Option<&str>) -> ProviderError {
        let reason = match (finish_reason, block_reason) {
            (Some("SAFETY"), _) | (None, Some(_)) => GenerationFailure::SafetyBlock,
            (Some("MAX_TOKENS"), _) => GenerationFailure::TokenLimit,
            (Some(other), _) => GenerationFailure::Unspecified(other.to_string()),
            (None, None) => GenerationFailure::Unspecified("no candidates returned".to_string()),
        };
        ProviderError::generation("gemini", reason)
    }

    fn extract_message(body: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}
