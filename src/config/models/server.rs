//! Listener settings for the HTTP transport

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where and how the gateway listens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Actix worker count; one per CPU when unset
    pub workers: Option<usize>,
    /// Upper bound on a JSON request body, in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` pair handed to the listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if matches!(self.workers, Some(0)) {
            return Err("server.workers must be at least 1".to_string());
        }
        if self.max_body_size == 0 {
            return Err("server.max_body_size must be non-zero".to_string());
        }
        self.cors.validate()
    }
}

/// Cross-origin policy for browser clients
///
/// The gateway only serves `GET` and `POST` JSON routes, so methods and
/// headers are fixed by the transport; only origins are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Empty, or containing `*`, admits every origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.allows_all_origins() {
            if self.allow_credentials {
                return Err("cors.allow_credentials requires explicit origins".to_string());
            }
            warn!("CORS admits every origin");
        }
        Ok(())
    }
}
