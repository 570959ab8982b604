//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variables that override file configuration
pub const ENV_HOST: &str = "GATEWAY_HOST";
pub const ENV_PORT: &str = "GATEWAY_PORT";
pub const ENV_WORKERS: &str = "GATEWAY_WORKERS";
pub const ENV_AUTH_TOKEN: &str = "GATEWAY_AUTH_TOKEN";
pub const ENV_BATCH_CONCURRENCY: &str = "GATEWAY_BATCH_CONCURRENCY";

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Batch dispatcher configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

impl GatewayConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides looked up through `lookup`.
    ///
    /// Unset variables leave the current value alone; set but unparseable
    /// ones are a configuration error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(workers) = lookup(ENV_WORKERS) {
            self.server.workers = Some(parse_var(ENV_WORKERS, &workers)?);
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN) {
            self.auth.token = Some(token);
        }
        if let Some(concurrency) = lookup(ENV_BATCH_CONCURRENCY) {
            self.batch.concurrency = parse_var(ENV_BATCH_CONCURRENCY, &concurrency)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.server.validate()?;
        self.auth.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid value for {}: {}", key, e)))
}
