//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed<S: Into<String>>(message: S) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by the caller rather than the gateway
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest(_)
                | Self::Unauthorized(_)
                | Self::NotFound(_)
                | Self::MethodNotAllowed(_)
                | Self::Conflict(_)
        )
    }
}
