//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Per-provider settings
///
/// Carries no credentials: every request brings its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identity, matching a registered variant
    pub name: String,
    /// Whether the provider is registered at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default model override
    #[serde(default)]
    pub model: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Bill every request at zero cost
    #[serde(default = "default_true")]
    pub free_tier: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            base_url: None,
            model: None,
            timeout: default_timeout(),
            free_tier: true,
        }
    }
}

impl ProviderConfig {
    /// Default settings for the named provider
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Validate a single provider entry
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }

        let supported = crate::core::providers::supported_providers();
        if !supported.contains(&self.name.as_str()) {
            return Err(format!(
                "Unsupported provider: {} (supported: {})",
                self.name,
                supported.join(", ")
            ));
        }

        if self.timeout == 0 {
            return Err(format!("Timeout for provider {} cannot be 0", self.name));
        }

        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)
                .map_err(|e| format!("Invalid base URL for provider {}: {}", self.name, e))?;
        }

        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(format!("Model for provider {} cannot be empty", self.name));
            }
        }

        Ok(())
    }
}
