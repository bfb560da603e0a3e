//! Provider status snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of a provider, derived from its counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStatus {
    /// Provider identity
    pub name: String,
    /// Result of the most recent health check
    pub healthy: bool,
    /// When the most recent health check ran
    pub last_check: DateTime<Utc>,
    /// Mean latency in milliseconds over all requests
    pub average_latency: f64,
    /// Fraction of requests that succeeded, in [0, 1]
    pub success_rate: f64,
    /// Requests served so far
    pub total_requests: u64,
}
