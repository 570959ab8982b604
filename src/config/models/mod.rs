//! Configuration data models
//!
//! This module defines all configuration structures used by the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod batch;
pub mod gateway;
pub mod server;

// Re-export all configuration types
pub use auth::*;
pub use batch::*;
pub use gateway::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Sub-requests of a batch run one after another unless configured otherwise
pub fn default_batch_concurrency() -> usize {
    1
}
