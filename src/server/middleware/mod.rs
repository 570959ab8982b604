//! HTTP middleware implementations
//!
//! - Authentication against the configured shared token
//! - Request ID tracking

mod auth;
mod helpers;
mod request_id;


// Re-export all middleware
pub use auth::{AuthMiddleware, AuthMiddlewareService, UNAUTHORIZED_MESSAGE};
pub use helpers::{extract_request_id, is_authorized, is_public_route};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
