//! batch-gateway - HTTP backend with an in-process batch dispatcher

#![allow(missing_docs)]

use batch_gateway::server;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Address to bind, overriding the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();

    let mut config = match server::load_config(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
