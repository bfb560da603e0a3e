//! Unified Provider Error Handling
//!
//! Single error type returned by every provider variant.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | Authentication | Backend rejected the credential | 401 |
//! | Generation | Backend answered without usable output | 502 |
//! | Upstream | Transport or backend failure | 502 |
//! | Configuration | Provider could not be built from its config | 500 |
//! | Serialization | Backend payload could not be read | 502 |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use llm_platform::core::providers::{GenerationFailure, ProviderError};
//!
//! let err = ProviderError::authentication("gemini", "API key not valid");
//! let err = ProviderError::generation("gemini", GenerationFailure::SafetyBlock);
//! assert!(!err.is_caller_fault());
//! ```

use std::fmt;

/// Why a backend call produced no usable content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// Output withheld by the backend's safety filters
    SafetyBlock,
    /// Generation stopped at the token limit before any text was produced
    TokenLimit,
    /// Backend stopped for another reason, carried verbatim
    Unspecified(String),
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationFailure::SafetyBlock => write!(f, "Content blocked by safety filters"),
            GenerationFailure::TokenLimit => write!(f, "Content hit token limit"),
            GenerationFailure::Unspecified(reason) => {
                write!(f, "No response generated: {}", reason)
            }
        }
    }
}

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Generation failed for {provider}: {reason}")]
    Generation {
        provider: &'static str,
        reason: GenerationFailure,
    },

    #[error("Upstream error for {provider}: {message}")]
    Upstream {
        provider: &'static str,
        /// HTTP status returned by the backend, if it answered at all
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn generation(provider: &'static str, reason: GenerationFailure) -> Self {
        Self::Generation { provider, reason }
    }

    /// Transport failure with no HTTP answer
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            status: None,
            message: message.into(),
        }
    }

    /// Non-success HTTP answer from the backend
    pub fn upstream(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            ProviderError::Authentication { provider, .. }
            | ProviderError::Generation { provider, .. }
            | ProviderError::Upstream { provider, .. }
            | ProviderError::Configuration { provider, .. }
            | ProviderError::Serialization { provider, .. } => provider,
        }
    }

    /// Whether the caller can fix this by changing what it sent
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, ProviderError::Authentication { .. })
    }

    /// HTTP status for the transport layer
    pub fn http_status(&self) -> u16 {
        match self {
            ProviderError::Authentication { .. } => 401,
            ProviderError::Configuration { .. } => 500,
            ProviderError::Generation { .. }
            | ProviderError::Upstream { .. }
            | ProviderError::Serialization { .. } => 502,
        }
    }
}
