//! Health monitor implementation
//!
//! The health pass is fail-fast: a registered provider without a credential,
//! or one whose probe fails, aborts the whole pass and no later provider is
//! probed.

use crate::core::providers::ProviderRegistry;
use crate::core::types::{CredentialMap, HealthCheckResult};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs health passes over a provider registry
#[derive(Debug, Clone)]
pub struct HealthMonitor {
    registry: Arc<ProviderRegistry>,
}

impl HealthMonitor {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Check every registered provider, in registry order
    ///
    /// On success every returned result has `status == true`. Fails with
    /// `MissingCredential` for the first provider absent from `credentials`,
    /// or `ProviderUnhealthy` carrying the first failing probe's diagnostic.
    pub async fn check_all(&self, credentials: &CredentialMap) -> Result<Vec<HealthCheckResult>> {
        let mut results = Vec::with_capacity(self.registry.len());

        for provider in self.registry.iter() {
            let name = provider.name();
            let credential = credentials
                .get(name)
                .ok_or_else(|| GatewayError::MissingCredential(name.to_string()))?;

            debug!(provider = %name, "Running health check");
            let result = provider.health_check(credential).await;

            if !result.status {
                let message = result
                    .error
                    .unwrap_or_else(|| "health check failed".to_string());
                warn!(provider = %name, error = %message, "Provider failed health pass");
                return Err(GatewayError::ProviderUnhealthy {
                    provider: name.to_string(),
                    message,
                });
            }

            results.push(result);
        }

        info!(providers = results.len(), "Health pass completed");
        Ok(results)
    }
}

/// Identities that passed, preserving order
pub fn healthy_identities(results: &[HealthCheckResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.status)
        .map(|r| r.provider.clone())
        .collect()
}
