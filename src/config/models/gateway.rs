//! Top-level `gateway:` section

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the gateway reads at startup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations; unlisted providers run with defaults
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Defaults overlaid with process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// Reads `GATEWAY_HOST`, `GATEWAY_PORT`, `GEMINI_BASE_URL` and `GEMINI_MODEL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("GATEWAY_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("GATEWAY_PORT") {
            config.server.port = port.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid GATEWAY_PORT '{}': {}", port, e))
            })?;
        }

        let base_url = lookup("GEMINI_BASE_URL");
        let model = lookup("GEMINI_MODEL");
        if base_url.is_some() || model.is_some() {
            config.providers.push(ProviderConfig {
                base_url,
                model,
                ..ProviderConfig::named("gemini")
            });
        }

        Ok(config)
    }

    /// Configuration for the named provider, if listed
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Every section, then provider uniqueness
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.server.validate()?;

        let mut provider_names = HashSet::new();
        for provider in &self.providers {
            provider.validate()?;
            if !provider_names.insert(provider.name.as_str()) {
                return Err(format!("Duplicate provider name: {}", provider.name));
            }
        }

        self.logging.validate()
    }
}
