//! Helper functions for middleware

use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health"];

    PUBLIC_ROUTES
        .iter()
        .any(|&route| path.trim_end_matches('/') == route)
}

/// Whether the `Authorization` header equals `token` exactly
pub fn is_authorized(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .is_some_and(|value| value.as_bytes() == token.as_bytes())
}

/// An inbound request ID worth reusing: printable and of sane length
pub fn extract_request_id(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
}
