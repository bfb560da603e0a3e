//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::completion::CompletionService;
use std::sync::Arc;

/// Handler state
///
/// Holds no credentials; they arrive with each request and leave with it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only after startup
    pub config: Arc<Config>,
    /// Health pass, routing and provider dispatch
    pub service: Arc<CompletionService>,
}

impl AppState {
    pub fn new(config: Config, service: CompletionService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}
