//! llm-platform gateway binary

use anyhow::Context;
use clap::Parser;
use llm_platform::config::LoggingConfig;
use llm_platform::server::builder::{load_config, run_server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// LLM routing gateway
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(Some(&cli.config))
        .await
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    init_tracing(config.logging());
    if cli.config.exists() {
        info!("Loaded configuration from {}", cli.config.display());
    } else {
        warn!(
            "Configuration file {} not found, using environment and defaults",
            cli.config.display()
        );
    }

    run_server(config).await.context("gateway server failed")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
