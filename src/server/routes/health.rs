//! Health check endpoint

use crate::core::router::{RouteContext, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Health status payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

/// Basic health check.
///
/// Public: the auth middleware lets it through without a token.
pub async fn health_check(_req: RouteRequest, _ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    debug!("Health check requested");

    RouteResponse::json(&HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    })
}
