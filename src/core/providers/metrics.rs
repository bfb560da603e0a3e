//! Per-provider request metrics
//!
//! Every provider instance embeds one `ProviderMetrics`. Counters are
//! append-only for the life of the process and are shared by all concurrent
//! requests hitting that provider, so every update happens under one lock.

use crate::core::types::ProviderStatus;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
struct MetricsState {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    total_latency_ms: f64,
    last_error: Option<String>,
    is_healthy: bool,
    last_check: DateTime<Utc>,
}

/// Running counters plus the latest health verdict for one provider
#[derive(Debug)]
pub struct ProviderMetrics {
    state: Mutex<MetricsState>,
}

impl ProviderMetrics {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MetricsState {
                total_requests: 0,
                successful_requests: 0,
                failed_requests: 0,
                total_latency_ms: 0.0,
                last_error: None,
                is_healthy: true,
                last_check: Utc::now(),
            }),
        }
    }

    /// Record the outcome of one request
    pub fn record(&self, latency_ms: f64, success: bool, error: Option<String>) {
        let mut state = self.state.lock();
        state.total_requests += 1;
        state.total_latency_ms += latency_ms;
        if success {
            state.successful_requests += 1;
            state.last_error = None;
        } else {
            state.failed_requests += 1;
            state.last_error = error;
        }
    }

    /// Record the verdict of a health check
    pub fn mark_health(&self, healthy: bool) {
        let mut state = self.state.lock();
        state.is_healthy = healthy;
        state.last_check = Utc::now();
    }

    /// Derive the status snapshot; denominators are floored at 1
    pub fn snapshot(&self, name: &str) -> ProviderStatus {
        let state = self.state.lock();
        let denominator = state.total_requests.max(1) as f64;

        ProviderStatus {
            name: name.to_string(),
            healthy: state.is_healthy,
            last_check: state.last_check,
            average_latency: state.total_latency_ms / denominator,
            success_rate: state.successful_requests as f64 / denominator,
            total_requests: state.total_requests,
        }
    }

    pub fn total_requests(&self) -> u64 {
        self.state.lock().total_requests
    }

    pub fn successful_requests(&self) -> u64 {
        self.state.lock().successful_requests
    }

    pub fn failed_requests(&self) -> u64 {
        self.state.lock().failed_requests
    }

    pub fn total_latency_ms(&self) -> f64 {
        self.state.lock().total_latency_ms
    }

    /// Diagnostic from the most recent failed request, cleared by a success
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    pub fn is_healthy(&self) -> bool {
        self.state.lock().is_healthy
    }
}

impl Default for ProviderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
