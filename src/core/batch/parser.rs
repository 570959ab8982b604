//! Batch body parsing

use super::types::{BatchParseError, BatchSpec, SubRequestSpec};
use actix_web::http::Method;
use serde_json::Value;

/// Parse a raw batch body
pub fn parse_bytes(body: &[u8]) -> Result<BatchSpec, BatchParseError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| BatchParseError::InvalidJson(e.to_string()))?;
    parse(&value)
}

/// Parse a batch body of the form `{"requests": [{method, uri, values?}, ...]}`.
///
/// All-or-nothing: the first invalid descriptor rejects the whole batch.
pub fn parse(body: &Value) -> Result<BatchSpec, BatchParseError> {
    let descriptors = body
        .get("requests")
        .and_then(Value::as_array)
        .ok_or(BatchParseError::MissingRequestsArray)?;

    let requests = descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| parse_descriptor(index, descriptor))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BatchSpec { requests })
}

fn parse_descriptor(index: usize, descriptor: &Value) -> Result<SubRequestSpec, BatchParseError> {
    let raw_method = descriptor
        .get("method")
        .and_then(Value::as_str)
        .filter(|method| !method.is_empty())
        .ok_or(BatchParseError::MissingMethod { index })?;

    let method = parse_method(raw_method).ok_or_else(|| BatchParseError::InvalidMethod {
        index,
        method: raw_method.to_string(),
    })?;

    let uri = descriptor
        .get("uri")
        .and_then(Value::as_str)
        .filter(|uri| !uri.is_empty())
        .ok_or(BatchParseError::MissingUri { index })?;

    let values = match descriptor.get("values") {
        None | Some(Value::Null) => None,
        Some(Value::Object(values)) => Some(values.clone()),
        Some(_) => return Err(BatchParseError::InvalidValues { index }),
    };

    Ok(SubRequestSpec {
        method,
        uri: uri.to_string(),
        values,
    })
}

/// Map a method string onto an HTTP method.
///
/// Matching is case-insensitive, so `post` is `POST`. Strings that are not
/// standard verbs are kept as extension methods as long as they are valid
/// HTTP tokens.
pub fn parse_method(raw: &str) -> Option<Method> {
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).ok()
}
