//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        match error.kind() {
            ErrorKind::AddrInUse => GatewayError::server(format!(
                "Port {} is already in use. Stop the other process or pick another port, \
                 e.g. --port {} or GATEWAY_PORT={}",
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            )),
            ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Permission denied for port {}. Ports below 1024 are privileged, try --port 8000",
                port
            )),
            _ => GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
