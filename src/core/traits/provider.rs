//! Core LLM Provider trait definitions
//!
//! Defines the capability set every AI provider exposes to the routing core

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::metrics::ProviderMetrics;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{ChatRequest, ChatResponse, Credential, HealthCheckResult, ProviderStatus};

/// Unified LLM Provider interface
///
/// One instance exists per provider identity for the life of the process, so
/// implementations must be safe to call from many requests at once. Nothing
/// request-specific is stored on the instance: credentials arrive with each
/// call and are only borrowed for its duration.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl LLMProvider for MyProvider {
///     fn name(&self) -> &'static str {
///         "my_provider"
///     }
///
///     fn metrics(&self) -> &ProviderMetrics {
///         &self.metrics
///     }
///
///     // implement chat_completion, health_check and estimate_cost...
/// }
/// ```
#[async_trait]
pub trait LLMProvider: Send + Sync + Debug + 'static {
    /// Stable provider identity, unique within the registry
    fn name(&self) -> &'static str;

    /// Metrics tracker embedded in this instance
    fn metrics(&self) -> &ProviderMetrics;

    /// Generate a chat completion with the caller's credential
    ///
    /// Implementations record latency and outcome through
    /// [`LLMProvider::update_metrics`] on every path before returning,
    /// including failures.
    async fn chat_completion(
        &self,
        request: &ChatRequest,
        credential: &Credential,
    ) -> Result<ChatResponse, ProviderError>;

    /// Probe the backend with a minimal real call
    ///
    /// Never fails: problems are reported in the result. Updates the health
    /// flag and last-check time regardless of outcome.
    async fn health_check(&self, credential: &Credential) -> HealthCheckResult;

    /// Estimated USD cost of `tokens` tokens on `model`
    fn estimate_cost(&self, tokens: u32, model: &str) -> f64;

    /// Record one request outcome
    fn update_metrics(&self, latency_ms: f64, success: bool, error: Option<String>) {
        self.metrics().record(latency_ms, success, error);
    }

    /// Current status snapshot
    fn get_status(&self) -> ProviderStatus {
        self.metrics().snapshot(self.name())
    }
}
