//! Route table and its dispatchable form

use super::dispatch::Dispatch;
use super::pattern::{Params, PathPattern};
use super::types::{RouteRequest, RouteResponse};
use crate::utils::error::{GatewayError, Result};
use actix_web::http::Method;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

/// Boxed future returned by route handlers
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<RouteResponse>> + Send>>;

type BoxedHandler<S> = Arc<dyn Fn(RouteRequest, RouteContext<S>) -> HandlerFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    pattern: PathPattern,
    handler: BoxedHandler<S>,
}

/// Route table under construction.
///
/// Routes are tried in registration order; the first one whose method and
/// pattern both match wins.
pub struct Router<S> {
    routes: Vec<Route<S>>,
}

impl<S> Router<S>
where
    S: Send + Sync + 'static,
{
    /// Create an empty route table
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for `method` on `pattern`
    pub fn route<F, Fut>(mut self, method: Method, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        let handler: BoxedHandler<S> =
            Arc::new(move |req: RouteRequest, ctx: RouteContext<S>| -> HandlerFuture {
                Box::pin(handler(req, ctx))
            });
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler,
        });
        self
    }

    pub fn get<F, Fut>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        self.route(Method::GET, pattern, handler)
    }

    pub fn post<F, Fut>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        self.route(Method::POST, pattern, handler)
    }

    pub fn put<F, Fut>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        self.route(Method::PUT, pattern, handler)
    }

    pub fn patch<F, Fut>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        self.route(Method::PATCH, pattern, handler)
    }

    pub fn delete<F, Fut>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(RouteRequest, RouteContext<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RouteResponse>> + Send + 'static,
    {
        self.route(Method::DELETE, pattern, handler)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freeze the table together with the state its handlers share
    pub fn with_state(self, state: S) -> AppRouter<S> {
        AppRouter {
            inner: Arc::new(Inner {
                router: self,
                state,
            }),
        }
    }

    fn find(&self, method: &Method, path: &str) -> Result<(BoxedHandler<S>, Params)> {
        let mut path_matched = false;

        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                if &route.method == method {
                    debug!(method = %method, path, pattern = %route.pattern, "Route matched");
                    return Ok((Arc::clone(&route.handler), params));
                }
                path_matched = true;
            }
        }

        debug!(method = %method, path, "No route matched");
        if path_matched {
            Err(GatewayError::method_not_allowed(format!(
                "{} is not supported on {}",
                method, path
            )))
        } else {
            Err(GatewayError::not_found(format!(
                "No route for {} {}",
                method, path
            )))
        }
    }
}

impl<S> Default for Router<S>
where
    S: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

struct Inner<S> {
    router: Router<S>,
    state: S,
}

/// A frozen route table bound to its shared state.
///
/// Cheap to clone. This is the router adapter handed to handlers (through
/// [`RouteContext`]) and to the HTTP server.
pub struct AppRouter<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for AppRouter<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> AppRouter<S>
where
    S: Send + Sync + 'static,
{
    /// The shared state
    pub fn state(&self) -> &S {
        &self.inner.state
    }

    /// Route a request to its handler
    pub async fn route(&self, request: RouteRequest) -> Result<RouteResponse> {
        let (handler, params) = self.inner.router.find(&request.method, request.path())?;
        let ctx = RouteContext {
            params,
            router: self.clone(),
        };
        handler(request, ctx).await
    }
}

#[async_trait]
impl<S> Dispatch for AppRouter<S>
where
    S: Send + Sync + 'static,
{
    async fn dispatch(&self, request: RouteRequest) -> Result<RouteResponse> {
        self.route(request).await
    }
}

/// Per-request context passed to handlers
pub struct RouteContext<S> {
    params: Params,
    router: AppRouter<S>,
}

impl<S> RouteContext<S>
where
    S: Send + Sync + 'static,
{
    /// The shared state
    pub fn state(&self) -> &S {
        self.router.state()
    }

    /// All captured path parameters
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// A captured path parameter; a missing one means the route was
    /// registered with a different pattern than the handler expects
    pub fn param(&self, name: &str) -> Result<&str> {
        self.params.get(name).ok_or_else(|| {
            GatewayError::internal(format!("Route parameter '{}' is not captured", name))
        })
    }

    /// The router that dispatched this request, for handlers that
    /// re-dispatch synthetic requests
    pub fn router(&self) -> &AppRouter<S> {
        &self.router
    }
}
