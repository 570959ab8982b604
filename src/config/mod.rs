//! Configuration management for the gateway
//!
//! Configuration is read from a YAML file, then selected values can be
//! overridden from the environment.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means every section takes its defaults
        let gateway: GatewayConfig = if content.trim().is_empty() {
            GatewayConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let gateway = GatewayConfig::from_env()?;
        let config = Self { gateway };

        config.validate()?;
        Ok(config)
    }

    /// Override values from the process environment and re-validate
    pub fn apply_env_overrides(mut self) -> Result<Self> {
        self.gateway.apply_env(|key| std::env::var(key).ok())?;
        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.gateway.batch
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .auth
            .validate()
            .map_err(|e| GatewayError::Config(format!("Auth config error: {}", e)))?;

        self.gateway
            .batch
            .validate()
            .map_err(|e| GatewayError::Config(format!("Batch config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
