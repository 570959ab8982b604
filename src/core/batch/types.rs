//! Batch dispatcher types and data structures

use crate::core::router::RouteRequest;
use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Ordered sub-request specifications parsed from one batch body
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSpec {
    pub requests: Vec<SubRequestSpec>,
}

impl BatchSpec {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// One sub-request of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct SubRequestSpec {
    pub method: Method,
    /// Target, used as given
    pub uri: String,
    /// JSON body of the synthetic request
    pub values: Option<Map<String, Value>>,
}

/// A sub-request in the form the router accepts
pub type SyntheticRequest = RouteRequest;

/// Normalized result of one sub-request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubResponseValue {
    /// The handler answered with plain text
    PlainText(String),
    /// The handler answered with anything else, kept as JSON
    Structured(Value),
}

impl From<SubResponseValue> for Value {
    fn from(value: SubResponseValue) -> Self {
        match value {
            SubResponseValue::PlainText(text) => Value::String(text),
            SubResponseValue::Structured(value) => value,
        }
    }
}

/// Outbound payload of a successful batch.
///
/// Note the key is `responses` while the inbound key is `requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub responses: Vec<SubResponseValue>,
}

/// Why a batch body was rejected before anything was dispatched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchParseError {
    #[error("Batch body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON does not have a requests array.")]
    MissingRequestsArray,

    #[error("Request {index} does not have a method.")]
    MissingMethod { index: usize },

    #[error("Request {index} has an invalid method: {method:?}")]
    InvalidMethod { index: usize, method: String },

    #[error("Request {index} does not have a uri.")]
    MissingUri { index: usize },

    #[error("Request {index} has values that are not a JSON object.")]
    InvalidValues { index: usize },

    #[error("Batch contains {count} requests, the limit is {limit}.")]
    TooManyRequests { count: usize, limit: usize },
}
