//! Request and response bodies for the HTTP surface
//!
//! Boundary validation lives here; the core assumes validated input.

use crate::core::types::{
    ChatMessage, ChatRequest, Credential, CredentialMap, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    HealthCheckResult, ProviderPreference, ProviderStatus,
};
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;
pub const MIN_MAX_TOKENS: u32 = 1;
pub const MAX_MAX_TOKENS: u32 = 4000;

/// One provider credential as sent by the client
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialEntry {
    pub name: String,
    pub api_key: Credential,
}

/// Collapse credential entries into a lookup; later duplicates win
pub fn credential_map(entries: Vec<CredentialEntry>) -> CredentialMap {
    entries
        .into_iter()
        .map(|entry| (entry.name, entry.api_key))
        .collect()
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequestBody {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(alias = "message")]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default, alias = "api_keys")]
    pub credentials: Vec<CredentialEntry>,
}

impl ChatRequestBody {
    /// Check ranges and required fields
    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            return Err(GatewayError::validation("messages must not be empty"));
        }

        if let Some(index) = self.messages.iter().position(|m| m.content.trim().is_empty()) {
            return Err(GatewayError::validation(format!(
                "messages[{}].content must not be empty",
                index
            )));
        }

        if let Some(temperature) = self.temperature {
            if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
                return Err(GatewayError::validation(format!(
                    "temperature must be between {} and {}",
                    MIN_TEMPERATURE, MAX_TEMPERATURE
                )));
            }
        }

        if let Some(max_tokens) = self.max_tokens {
            if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
                return Err(GatewayError::validation(format!(
                    "max_tokens must be between {} and {}",
                    MIN_MAX_TOKENS, MAX_MAX_TOKENS
                )));
            }
        }

        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(GatewayError::validation("model must not be blank"));
        }

        Ok(())
    }

    /// Validate and convert into the core request, applying defaults
    pub fn into_chat_request(self) -> Result<ChatRequest> {
        self.validate()?;

        Ok(ChatRequest {
            provider: self
                .provider
                .map(ProviderPreference::from)
                .unwrap_or_default(),
            messages: self.messages,
            model: self.model,
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            credentials: credential_map(self.credentials),
        })
    }
}

/// Body of `POST /health`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthRequestBody {
    #[serde(default, alias = "api_keys")]
    pub providers: Vec<CredentialEntry>,
}

impl HealthRequestBody {
    /// Parse a raw `/health` body; an empty body carries no credentials
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(raw)
            .map_err(|e| GatewayError::validation(format!("Invalid health request body: {}", e)))
    }
}

/// Result of one health pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub providers: Vec<HealthCheckResult>,
    pub uptime_seconds: u64,
}

/// Status snapshot of every provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub providers: Vec<ProviderStatus>,
    pub uptime_seconds: u64,
}

/// Build metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
    pub providers: Vec<String>,
}
