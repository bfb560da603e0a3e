//! Gemini Configuration Module

use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::core::providers::unified_provider::ProviderError;

/// Google AI Studio endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini provider configuration
///
/// Holds no credentials: the API key arrives with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL including the API version segment
    pub base_url: String,
    /// Default model
    pub model: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
    /// Bill every request at zero cost
    pub free_tier: bool,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 60,
            connect_timeout: 10,
            free_tier: true,
        }
    }
}

impl GeminiConfig {
    /// Build from the gateway-level provider entry, keeping defaults for unset fields
    pub fn from_provider_config(config: &ProviderConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: config.base_url.clone().unwrap_or(defaults.base_url),
            model: config.model.clone().unwrap_or(defaults.model),
            request_timeout: config.timeout,
            connect_timeout: defaults.connect_timeout,
            free_tier: config.free_tier,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_free_tier(mut self, free_tier: bool) -> Self {
        self.free_tier = free_tier;
        self
    }

    /// Endpoint for `operation` on `model`
    pub fn get_endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model,
            operation
        )
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        url::Url::parse(&self.base_url).map_err(|e| {
            ProviderError::configuration("gemini", format!("Invalid base URL: {}", e))
        })?;

        if self.model.trim().is_empty() {
            return Err(ProviderError::configuration("gemini", "Model cannot be empty"));
        }

        if self.request_timeout == 0 {
            return Err(ProviderError::configuration(
                "gemini",
                "Request timeout cannot be 0",
            ));
        }

        Ok(())
    }
}
