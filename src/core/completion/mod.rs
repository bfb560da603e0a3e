//! Chat completion flow
//!
//! One chat request runs a health pass over every registered provider with the
//! request's credentials, routes to one healthy provider, and makes a single
//! attempt against it. There is no retry and no fallback once a provider is
//! selected.

use crate::core::health::HealthMonitor;
use crate::core::health::monitor::healthy_identities;
use crate::core::providers::ProviderRegistry;
use crate::core::router;
use crate::core::types::{
    ChatRequest, ChatResponse, CredentialMap, HealthCheckResult, ProviderStatus,
};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{error, info};


/// Entry point for the three inbound operations: chat, health, status
#[derive(Debug, Clone)]
pub struct CompletionService {
    registry: Arc<ProviderRegistry>,
    monitor: HealthMonitor,
}

impl CompletionService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        let monitor = HealthMonitor::new(Arc::clone(&registry));
        Self { registry, monitor }
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Serve one chat request
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let results = self.monitor.check_all(&request.credentials).await?;
        let healthy = healthy_identities(&results);

        let selected = router::select(request, &healthy)?;
        let provider = self.registry.get(&selected)?;
        let credential = request
            .credentials
            .get(&selected)
            .ok_or_else(|| GatewayError::MissingCredential(selected.clone()))?;

        match provider.chat_completion(request, credential).await {
            Ok(response) => {
                info!(
                    provider = %response.provider,
                    model = %response.model,
                    tokens = response.tokens_used,
                    latency_ms = response.latency_ms,
                    "Chat completion served"
                );
                Ok(response)
            }
            Err(e) => {
                error!(provider = %selected, error = %e, "Chat completion failed");
                Err(e.into())
            }
        }
    }

    /// Run one health pass with the caller's credentials
    pub async fn health(&self, credentials: &CredentialMap) -> Result<Vec<HealthCheckResult>> {
        self.monitor.check_all(credentials).await
    }

    /// Status snapshot of every registered provider, in registry order
    pub fn status(&self) -> Vec<ProviderStatus> {
        self.registry.statuses()
    }
}
