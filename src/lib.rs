//! # llm-platform
//!
//! An LLM routing gateway. Every chat request carries its own provider
//! credentials; the gateway runs a health pass over all registered providers
//! with those credentials, picks one healthy provider, and forwards the
//! request to it.
//!
//! ## Features
//!
//! - **Open provider contract**: add a backend by implementing [`LLMProvider`]
//!   and listing it in [`core::providers::AVAILABLE_PROVIDERS`]
//! - **Per-request credentials**: keys are never stored, cached or logged
//! - **Deterministic routing**: `auto` takes the first healthy provider in
//!   registry order
//! - **Per-provider metrics**: request counts, success rate and latency
//!
//! ## Library use
//!
//! ```rust,no_run
//! use llm_platform::core::completion::CompletionService;
//! use llm_platform::core::providers::ProviderRegistry;
//! use llm_platform::core::types::{ChatMessage, ChatRequest};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ProviderRegistry::from_config(&[])?;
//!     let service = CompletionService::new(Arc::new(registry));
//!
//!     let request = ChatRequest::new(vec![ChatMessage::user("Hello!")])
//!         .with_credential("gemini", std::env::var("GEMINI_API_KEY")?);
//!     let response = service.chat(&request).await?;
//!
//!     println!("{}: {}", response.provider, response.generated_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use llm_platform::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::completion::CompletionService;
pub use core::providers::{ProviderError, ProviderRegistry};
pub use core::traits::LLMProvider;
pub use core::types::{ChatMessage, ChatRequest, ChatResponse, Credential, MessageRole};

use tracing::info;

/// The gateway process: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the gateway server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting {} v{}", NAME, VERSION);
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time as seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

/// Build information recorded by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
    }
}
