//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Status code and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Serialization(_) => (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR"),
            GatewayError::Yaml(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            GatewayError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            GatewayError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            GatewayError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED")
            }
            GatewayError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            GatewayError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT"),
            GatewayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Internal details stay in the logs
        let message = match self {
            GatewayError::Io(_) | GatewayError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
