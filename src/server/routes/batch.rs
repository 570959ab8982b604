//! Batch endpoint

use crate::core::batch::BatchExecutor;
use crate::core::router::{RouteContext, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::Result;

/// `POST /batch`
///
/// Sub-requests are dispatched through the router that served this request,
/// so they reach exactly the handlers an external request would. They are not
/// authenticated again; the batch request itself already was.
pub async fn batch(req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let body = req.body.as_deref().unwrap_or_default();
    let executor = BatchExecutor::new(ctx.state().config().batch());

    let payload = executor.run(body, ctx.router()).await?;
    RouteResponse::json(&payload)
}
