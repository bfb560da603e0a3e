//! Health check types

use serde::{Deserialize, Serialize};

/// Outcome of one provider health check
///
/// Produced fresh by every check and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Provider identity
    pub provider: String,
    /// Whether the provider answered the probe with usable output
    pub status: bool,
    /// Diagnostic when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthCheckResult {
    /// Create a passing result
    pub fn healthy(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            status: true,
            error: None,
        }
    }

    /// Create a failing result
    pub fn unhealthy(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            status: false,
            error: Some(error.into()),
        }
    }
}
