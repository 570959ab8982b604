//! Batch dispatcher configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Batch dispatcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Sub-requests allowed in flight at once; 1 means strictly sequential
    #[serde(default = "default_batch_concurrency")]
    pub concurrency: usize,
    /// Largest accepted batch
    #[serde(default)]
    pub max_requests: Option<usize>,
    /// Per sub-request time limit in milliseconds
    #[serde(default)]
    pub sub_request_timeout_ms: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_batch_concurrency(),
            max_requests: None,
            sub_request_timeout_ms: None,
        }
    }
}

impl BatchConfig {
    /// Validate batch configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency == 0 {
            return Err("Batch concurrency must be at least 1".to_string());
        }

        if self.max_requests == Some(0) {
            return Err("Batch max_requests must be at least 1".to_string());
        }

        if self.sub_request_timeout_ms == Some(0) {
            return Err("Batch sub_request_timeout_ms must be at least 1".to_string());
        }

        Ok(())
    }
}
