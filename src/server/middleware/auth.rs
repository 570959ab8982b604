//! Authentication middleware

use crate::server::middleware::helpers::{is_authorized, is_public_route};
use crate::utils::error::GatewayError;
use actix_web::ResponseError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Message returned to callers without the right token.
///
/// Sent as `401 Unauthorized` with the standard JSON error body, not as a
/// `400 Bad Request`.
pub const UNAUTHORIZED_MESSAGE: &str = "The auth token was incorrect or not included in the header.";

/// Auth middleware for Actix-web.
///
/// Requests must carry the configured token verbatim in the `Authorization`
/// header. Public routes are exempt, and without a configured token every
/// request passes.
#[derive(Clone, Default)]
pub struct AuthMiddleware {
    token: Option<Arc<str>>,
}

impl AuthMiddleware {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.map(Arc::from),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            token: self.token.clone(),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
    token: Option<Arc<str>>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let allowed = match &self.token {
            None => true,
            Some(_) if is_public_route(req.path()) => true,
            Some(token) => is_authorized(req.headers(), token),
        };

        if !allowed {
            warn!(method = %req.method(), path = req.path(), "Rejected unauthenticated request");
            let response = GatewayError::unauthorized(UNAUTHORIZED_MESSAGE).error_response();
            return Box::pin(ready(Ok(req.into_response(response).map_into_right_body())));
        }

        debug!(path = req.path(), "Request authorized");
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
