//! Error handling for the Gateway
//!
//! This module defines the error type shared by the router, the batch
//! dispatcher and the HTTP layer, and its mapping onto HTTP responses.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
