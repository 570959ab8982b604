//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::batch::BatchParseError;

// A malformed batch descriptor is always the caller's fault
impl From<BatchParseError> for GatewayError {
    fn from(err: BatchParseError) -> Self {
        GatewayError::BadRequest(err.to_string())
    }
}
