//! Request and response types understood by the router

use crate::utils::error::{GatewayError, Result};
use actix_web::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use actix_web::http::{Method, StatusCode};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Content type used for plain-text handler responses
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// A request as seen by route handlers.
///
/// Requests received over HTTP and requests synthesized in-process (batch
/// sub-requests) share this type, so handlers cannot tell them apart.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub method: Method,
    /// Request target exactly as received
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl RouteRequest {
    /// Create a request without headers or body
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The path component of the target.
    ///
    /// Scheme and authority (`http://host:8080/users`, `localhost:8080/users`)
    /// are dropped because the target is always served in-process, and the
    /// query string and fragment are not part of route matching.
    ///
    /// Only a scheme that precedes the first `/` counts, so a `://` inside
    /// the path, query or fragment never changes which route is selected.
    pub fn path(&self) -> &str {
        let end = self.uri.find(['?', '#']).unwrap_or(self.uri.len());
        let mut target = &self.uri[..end];

        if let Some(idx) = target.find("://").filter(|&idx| !target[..idx].contains('/')) {
            target = &target[idx + 3..];
        }
        if !target.starts_with('/') {
            target = match target.find('/') {
                Some(idx) => &target[idx..],
                None => "/",
            };
        }

        target
    }

    /// The raw query string, if any
    pub fn query(&self) -> Option<&str> {
        let start = self.uri.find('?')? + 1;
        let rest = &self.uri[start..];
        let end = rest.find('#').unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// The declared content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Decode the JSON body
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self
            .body
            .as_ref()
            .filter(|body| !body.is_empty())
            .ok_or_else(|| GatewayError::bad_request("JSON not included in request."))?;

        serde_json::from_slice(body)
            .map_err(|e| GatewayError::bad_request(format!("Invalid JSON body: {}", e)))
    }
}

/// A handler's response
#[derive(Debug, Clone)]
pub struct RouteResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RouteResponse {
    /// A `200 OK` plain-text response
    pub fn text(text: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(TEXT_PLAIN_UTF8),
        );

        Self {
            status: StatusCode::OK,
            headers,
            body: Bytes::from(text.into()),
        }
    }

    /// A `200 OK` JSON response
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            status: StatusCode::OK,
            headers,
            body: Bytes::from(body),
        })
    }

    /// A response with no body and no content type
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Override the status code
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// The declared content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}
