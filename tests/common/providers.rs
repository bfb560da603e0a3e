//! In-process providers for exercising the core without a network

use async_trait::async_trait;
use chrono::Utc;
use llm_platform::core::providers::{ProviderError, ProviderMetrics, ProviderRegistry};
use llm_platform::core::traits::LLMProvider;
use llm_platform::core::types::{ChatRequest, ChatResponse, Credential, HealthCheckResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a scripted provider answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Healthy, and chat succeeds
    Ok,
    /// Health probe fails
    Unhealthy,
    /// Healthy, but chat fails with an upstream error
    ChatFails,
}

/// Provider whose answers are fixed at construction
///
/// Only accepts the credential it was built with.
#[derive(Debug)]
pub struct ScriptedProvider {
    name: &'static str,
    behaviour: Behaviour,
    accepted_key: &'static str,
    metrics: ProviderMetrics,
    health_calls: AtomicUsize,
    chat_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(name: &'static str, behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            name,
            behaviour,
            accepted_key: "valid-key",
            metrics: ProviderMetrics::new(),
            health_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
        })
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

/// Registry holding the given providers in order
pub fn registry_of(providers: &[Arc<ScriptedProvider>]) -> Arc<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();
    for provider in providers {
        registry
            .register(Arc::clone(provider) as Arc<dyn LLMProvider>)
            .unwrap();
    }
    Arc::new(registry)
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn metrics(&self) -> &ProviderMetrics {
        &self.metrics
    }

    async fn chat_completion(
        &self,
        request: &ChatRequest,
        credential: &Credential,
    ) -> Result<ChatResponse, ProviderError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);

        let outcome = if credential.expose() != self.accepted_key {
            Err(ProviderError::authentication(self.name, "credential rejected"))
        } else if self.behaviour == Behaviour::ChatFails {
            Err(ProviderError::network(self.name, "connection reset"))
        } else {
            Ok(())
        };

        if let Err(e) = outcome {
            self.update_metrics(3.0, false, Some(e.to_string()));
            return Err(e);
        }

        self.update_metrics(7.0, true, None);
        Ok(ChatResponse {
            provider: self.name.to_string(),
            model: request.model.clone().unwrap_or_else(|| "scripted".to_string()),
            generated_text: format!("{} answered", self.name),
            tokens_used: 4,
            cost: 0.0,
            latency_ms: 7.0,
            timestamp: Utc::now(),
        })
    }

    async fn health_check(&self, credential: &Credential) -> HealthCheckResult {
        self.health_calls.fetch_add(1, Ordering::SeqCst);

        let result = if self.behaviour == Behaviour::Unhealthy {
            HealthCheckResult::unhealthy(self.name, "backend unreachable")
        } else if credential.expose() != self.accepted_key {
            HealthCheckResult::unhealthy(self.name, "credential rejected")
        } else {
            HealthCheckResult::healthy(self.name)
        };

        self.metrics.mark_health(result.status);
        result
    }

    fn estimate_cost(&self, _tokens: u32, _model: &str) -> f64 {
        0.0
    }
}
