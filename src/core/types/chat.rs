//! Chat request and response types

use super::credential::{Credential, CredentialMap};
use super::message::ChatMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default completion budget in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Which provider the client wants to serve its request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderPreference {
    /// Let the router pick the first healthy provider
    #[default]
    Auto,
    /// A specific provider identity
    Named(String),
}

impl From<String> for ProviderPreference {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("auto") {
            ProviderPreference::Auto
        } else {
            ProviderPreference::Named(value)
        }
    }
}

impl From<&str> for ProviderPreference {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<ProviderPreference> for String {
    fn from(value: ProviderPreference) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ProviderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderPreference::Auto => write!(f, "auto"),
            ProviderPreference::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Chat request as seen by the routing core
///
/// Temperature and token bounds are enforced by the transport layer before a
/// request reaches the core. The credential map is consumed by the health pass
/// and the selected provider, then dropped with the request.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Provider preference
    pub provider: ProviderPreference,
    /// Conversation, oldest first; never empty
    pub messages: Vec<ChatMessage>,
    /// Model override; providers fall back to their configured default
    pub model: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum number of tokens to generate (1 - 4000)
    pub max_tokens: u32,
    /// Per-provider credentials for this request
    pub credentials: CredentialMap,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            provider: ProviderPreference::Auto,
            messages,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            credentials: CredentialMap::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<ProviderPreference>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_credential(
        mut self,
        provider: impl Into<String>,
        credential: impl Into<Credential>,
    ) -> Self {
        self.credentials.insert(provider.into(), credential.into());
        self
    }
}

/// Chat completion produced by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Provider that served the request
    pub provider: String,
    /// Model that generated the text
    pub model: String,
    /// Generated text
    pub generated_text: String,
    /// Approximate token usage
    pub tokens_used: u32,
    /// Estimated cost in USD
    pub cost: f64,
    /// Wall-clock latency of the backend call
    pub latency_ms: f64,
    /// Completion time
    pub timestamp: DateTime<Utc>,
}
