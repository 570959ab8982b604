//! In-process request router
//!
//! The route table maps `(method, path pattern)` pairs onto async handlers.
//! Every request the gateway serves goes through it: requests arriving over
//! HTTP are converted into a [`RouteRequest`] by the server's default
//! service, and sub-requests of a batch are synthesized as the same type and
//! dispatched through the same table.
//!
//! ## Module Structure
//!
//! - `types` - `RouteRequest` / `RouteResponse`
//! - `pattern` - path patterns and captured parameters
//! - `router` - the route table and its frozen, dispatchable form
//! - `dispatch` - the `Dispatch` capability consumed by the batch dispatcher

mod dispatch;
mod pattern;
mod router;
mod types;


pub use dispatch::Dispatch;
#[cfg(test)]
pub use dispatch::MockDispatch;
pub use pattern::{Params, PathPattern};
pub use router::{AppRouter, HandlerFuture, RouteContext, Router};
pub use types::{RouteRequest, RouteResponse};
