//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Log output settings; `RUST_LOG` overrides `level` when set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}
