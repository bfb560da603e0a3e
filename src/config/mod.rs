//! Gateway configuration
//!
//! The YAML document maps directly onto [`GatewayConfig`]; every section is
//! optional. Provider credentials are never part of it.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Validated configuration handed to the server at startup
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub gateway: GatewayConfig,
}

impl Config {
    /// Read and validate a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with environment variables
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let gateway = GatewayConfig::from_env()?;
        let config = Self { gateway };

        config.validate()?;
        Ok(config)
    }

    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.gateway.providers
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    pub fn validate(&self) -> Result<()> {
        self.gateway.validate().map_err(GatewayError::Config)
    }

    /// Serialize back to the on-disk YAML shape
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
