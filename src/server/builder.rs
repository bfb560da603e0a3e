//! Server startup with configuration loading

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration, falling back to environment and defaults
///
/// A missing file is not fatal; an unreadable or invalid one is.
pub async fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) if path.exists() => Config::from_file(path).await,
        Some(path) => {
            warn!(
                "Configuration file {:?} not found, using environment and defaults",
                path
            );
            Config::from_env()
        }
        None => Config::from_env(),
    }
}

/// Build the listener for `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    let server = HttpServer::new(&config)?;

    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   POST /chat    - Chat completion");
    info!("   POST /health  - Health pass with request credentials");
    info!("   GET  /status  - Provider status");
    info!("   GET  /version - Build information");

    server.start().await
}
