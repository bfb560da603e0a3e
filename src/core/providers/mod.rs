//! AI provider implementations
//!
//! Every backend implements [`LLMProvider`]; adding a vendor means adding a
//! variant module and one entry in the registry table.

pub mod gemini;
pub mod metrics;
pub mod provider_registry;
pub mod unified_provider;

// Export main types
pub use crate::core::traits::LLMProvider;
pub use metrics::ProviderMetrics;
pub use provider_registry::{AVAILABLE_PROVIDERS, ProviderFactory, ProviderRegistry, supported_providers};
pub use unified_provider::{GenerationFailure, ProviderError};
