//! Diagnostic and notification endpoints

use crate::core::router::{RouteContext, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::Result;
use std::fmt::Write;

/// Reply of `POST /notification` when no user has a push token
pub const NO_TOKEN: &str = "No token available";

/// `GET /info`: the request as the gateway saw it, in plain text
pub async fn info(req: RouteRequest, _ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    Ok(RouteResponse::text(describe(&req)))
}

/// `POST /notification`: the push token a notification would go to.
///
/// Delivery itself is left to an external push service.
pub async fn notification(
    _req: RouteRequest,
    ctx: RouteContext<AppState>,
) -> Result<RouteResponse> {
    let token = ctx.state().store().first_token().await?;
    Ok(RouteResponse::text(token.unwrap_or_else(|| NO_TOKEN.to_string())))
}

fn describe(req: &RouteRequest) -> String {
    let mut out = format!("{} {}\n", req.method, req.uri);

    let mut headers: Vec<_> = req
        .headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or("<binary>")))
        .collect();
    headers.sort();
    for (name, value) in headers {
        let _ = writeln!(out, "{}: {}", name, value);
    }

    if let Some(body) = req.body.as_ref().filter(|body| !body.is_empty()) {
        let _ = write!(out, "\n{}", String::from_utf8_lossy(body));
    }
    out
}
