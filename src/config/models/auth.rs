//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration.
///
/// Clients must send `token` verbatim in the `Authorization` header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared API token; authentication is disabled when unset
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthConfig {
    /// Whether requests must carry the token
    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err("Auth token cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

/// Warn about insecure configuration
pub fn warn_insecure_config(config: &AuthConfig) {
    if !config.is_enabled() {
        warn!("No auth token configured, authentication is disabled for every route");
    }
}
