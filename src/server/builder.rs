//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::storage::{EntityStore, MemoryStore};
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn EntityStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use `store` instead of a fresh in-memory store
    pub fn with_store(mut self, store: Arc<dyn EntityStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;
        config.validate()?;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        Ok(HttpServer::with_state(AppState::new(config, store)))
    }
}

/// Load the configuration file, falling back to defaults when it does not
/// exist, then apply environment overrides
pub async fn load_config(path: &Path) -> Result<Config> {
    let config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
        Config::from_file(path).await?
    } else {
        info!(
            "Configuration file {:?} not found, using default configuration",
            path
        );
        Config::default()
    };

    config.apply_env_overrides()
}

/// Build and run the server until it is shut down
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting batch gateway");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET|POST|DELETE /users, GET|PATCH|PUT|DELETE /users/{{device_id}}");
    info!("   GET|POST /logs, GET /logs/{{device_id}}");
    info!("   GET  /info, POST /notification");
    info!("   POST /batch - Batch of sub-requests");

    server.start().await
}
