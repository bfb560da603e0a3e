//! Gemini Provider Implementation

use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::providers::metrics::ProviderMetrics;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::LLMProvider;
use crate::core::types::{ChatRequest, ChatResponse, Credential, HealthCheckResult};

use super::client::{GeminiClient, GenerationParams};
use super::config::GeminiConfig;
use super::error::GeminiErrorMapper;
use super::models::{estimate_tokens, format_prompt, get_model_pricing};

const HEALTH_PROBE_PROMPT: &str = "hello";
const HEALTH_PROBE_MAX_TOKENS: u32 = 10;

/// Google Gemini provider
#[derive(Debug)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: GeminiClient,
    metrics: ProviderMetrics,
}

impl GeminiProvider {
    /// Build the provider; performs no network access
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = GeminiClient::new(config.clone())?;

        info!(model = %config.model, "Gemini provider initialized");

        Ok(Self {
            config,
            client,
            metrics: ProviderMetrics::new(),
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Run one generation and return its trimmed text, failing on empty output
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        params: GenerationParams,
        credential: &Credential,
    ) -> Result<String, ProviderError> {
        let body = self.client.build_request(prompt, params);
        let response = self.client.generate(model, &body, credential).await?;

        let text = response.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(GeminiErrorMapper::empty_output(
                response.finish_reason(),
                response.block_reason(),
            ));
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn metrics(&self) -> &ProviderMetrics {
        &self.metrics
    }

    async fn chat_completion(
        &self,
        request: &ChatRequest,
        credential: &Credential,
    ) -> Result<ChatResponse, ProviderError> {
        let start = Instant::now();
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let prompt = format_prompt(&request.messages);
        let params = GenerationParams::chat(request.temperature, request.max_tokens);

        debug!(model = %model, messages = request.messages.len(), "Sending request to Gemini");

        let result = self.generate_text(model, &prompt, params, credential).await;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(text) => {
                let tokens_used = estimate_tokens(&prompt, &text);
                let cost = self.estimate_cost(tokens_used, model);
                self.update_metrics(latency_ms, true, None);

                Ok(ChatResponse {
                    provider: self.name().to_string(),
                    model: model.to_string(),
                    generated_text: text,
                    tokens_used,
                    cost,
                    latency_ms,
                    timestamp: Utc::now(),
                })
            }
            Err(e) => {
                warn!(provider = "gemini", latency_ms, error = %e, "Chat completion failed");
                self.update_metrics(latency_ms, false, Some(e.to_string()));
                Err(e)
            }
        }
    }

    async fn health_check(&self, credential: &Credential) -> HealthCheckResult {
        let params = GenerationParams::probe(HEALTH_PROBE_MAX_TOKENS);

        let result = self
            .generate_text(&self.config.model, HEALTH_PROBE_PROMPT, params, credential)
            .await;

        match result {
            Ok(_) => {
                self.metrics.mark_health(true);
                HealthCheckResult::healthy(self.name())
            }
            Err(e) => {
                warn!(provider = "gemini", error = %e, "Health check failed");
                self.metrics.mark_health(false);
                HealthCheckResult::unhealthy(self.name(), e.to_string())
            }
        }
    }

    fn estimate_cost(&self, tokens: u32, model: &str) -> f64 {
        if self.config.free_tier {
            return 0.0;
        }

        get_model_pricing(model)
            .map(|pricing| tokens as f64 / 1_000_000.0 * pricing.blended())
            .unwrap_or(0.0)
    }
}
