//! Synthetic request construction

use super::types::{SubRequestSpec, SyntheticRequest};
use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;

/// Build the synthetic request for one sub-request.
///
/// A JSON content type and body are attached iff `values` is present. The
/// target is left untouched: it is routed in-process, not sent anywhere.
pub fn build(spec: SubRequestSpec) -> SyntheticRequest {
    let request = SyntheticRequest::new(spec.method, spec.uri);

    match spec.values {
        Some(values) => request
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(Value::Object(values).to_string()),
        None => request,
    }
}
