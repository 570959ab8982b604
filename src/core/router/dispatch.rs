//! The routing capability consumed by the batch dispatcher

use super::types::{RouteRequest, RouteResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Route a request to its handler and return the handler's response.
///
/// Implementations must be reentrant: a batch calls `dispatch` once per
/// sub-request, possibly with several calls in flight at once. A dispatched
/// request has exactly the side effects of the same request arriving over
/// HTTP. Routing and handler errors are returned, never swallowed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: RouteRequest) -> Result<RouteResponse>;
}
