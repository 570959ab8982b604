//! HTTP adapter for the route table
//!
//! The actix application has no routes of its own. Its default service
//! converts each request into a [`RouteRequest`], hands it to the route
//! table and converts the [`RouteResponse`] back.

use crate::core::router::{AppRouter, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, web};

/// Default service of the HTTP application
pub async fn route_external(
    req: HttpRequest,
    body: web::Bytes,
    router: web::Data<AppRouter<AppState>>,
) -> Result<HttpResponse, GatewayError> {
    let response = router.route(to_route_request(&req, body)).await?;
    Ok(into_http_response(response))
}

/// Convert an incoming HTTP request; an empty body counts as absent
pub fn to_route_request(req: &HttpRequest, body: web::Bytes) -> RouteRequest {
    RouteRequest {
        method: req.method().clone(),
        uri: req.uri().to_string(),
        headers: req.headers().clone(),
        body: (!body.is_empty()).then_some(body),
    }
}

/// Convert a handler response into an HTTP response
pub fn into_http_response(response: RouteResponse) -> HttpResponse {
    let mut builder = HttpResponse::build(response.status);
    for (name, value) in response.headers.iter() {
        builder.insert_header((name.clone(), value.clone()));
    }
    builder.body(response.body)
}
