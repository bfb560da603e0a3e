//! Error types for the Gateway

use crate::core::providers::unified_provider::ProviderError;
use crate::core::router::RouterError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request failed boundary validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registry miss; identity comparison is exact
    #[error("Unknown provider: {provider} (available: {})", .available.join(", "))]
    UnknownProvider {
        provider: String,
        available: Vec<String>,
    },

    /// A registered provider had no credential in the request
    #[error("Missing credential for provider: {0}")]
    MissingCredential(String),

    /// A provider failed the health pass
    #[error("Provider {provider} is unhealthy: {message}")]
    ProviderUnhealthy { provider: String, message: String },

    /// Provider errors
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Routing errors
    #[error(transparent)]
    Router(#[from] RouterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}
