//! Provider Registry
//!
//! Owns the single live instance of every enabled provider. Built once at
//! startup from the static table of known variants and read-only afterwards,
//! so lookups need no locking.

use super::gemini::{GeminiConfig, GeminiProvider};
use super::unified_provider::ProviderError;
use crate::config::ProviderConfig;
use crate::core::traits::LLMProvider;
use crate::core::types::ProviderStatus;
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Constructor for one provider variant
pub type ProviderFactory = fn(&ProviderConfig) -> std::result::Result<Arc<dyn LLMProvider>, ProviderError>;

/// Known provider variants, in routing priority order
pub const AVAILABLE_PROVIDERS: &[(&str, ProviderFactory)] = &[("gemini", create_gemini_provider)];

fn create_gemini_provider(
    config: &ProviderConfig,
) -> std::result::Result<Arc<dyn LLMProvider>, ProviderError> {
    let provider = GeminiProvider::new(GeminiConfig::from_provider_config(config))?;
    Ok(Arc::new(provider))
}

/// Identities of every variant this build knows about
pub fn supported_providers() -> Vec<&'static str> {
    AVAILABLE_PROVIDERS.iter().map(|(name, _)| *name).collect()
}

/// Registry of live provider instances, in registration order
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn LLMProvider>>,
    index: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate every known variant that the configuration does not disable
    ///
    /// Variants without a configuration entry get default settings.
    pub fn from_config(configs: &[ProviderConfig]) -> Result<Self> {
        let mut registry = Self::new();

        for (name, factory) in AVAILABLE_PROVIDERS {
            let config = configs
                .iter()
                .find(|c| c.name == *name)
                .cloned()
                .unwrap_or_else(|| ProviderConfig::named(*name));

            if !config.enabled {
                debug!(provider = %name, "Provider disabled by configuration");
                continue;
            }

            let provider = factory(&config)?;
            registry.register(provider)?;
            info!(provider = %name, "Registered provider");
        }

        Ok(registry)
    }

    /// Register a provider instance; identities must be unique
    pub fn register(&mut self, provider: Arc<dyn LLMProvider>) -> Result<()> {
        let name = provider.name().to_string();
        if self.index.contains_key(&name) {
            return Err(GatewayError::Config(format!(
                "Provider {} is already registered",
                name
            )));
        }

        self.index.insert(name, self.providers.len());
        self.providers.push(provider);
        Ok(())
    }

    /// Provider identities in priority order
    pub fn list(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Get provider by exact identity
    pub fn get(&self, name: &str) -> Result<Arc<dyn LLMProvider>> {
        self.index
            .get(name)
            .map(|&i| Arc::clone(&self.providers[i]))
            .ok_or_else(|| GatewayError::UnknownProvider {
                provider: name.to_string(),
                available: self.list(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Providers in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn LLMProvider>> {
        self.providers.iter()
    }

    /// Status snapshot of every provider
    pub fn statuses(&self) -> Vec<ProviderStatus> {
        self.providers.iter().map(|p| p.get_status()).collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.providers.len())
            .field("providers", &self.list())
            .finish()
    }
}
