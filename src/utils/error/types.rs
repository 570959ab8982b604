//! Error types for the Gateway

use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// A route exists for the path but not for the method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
