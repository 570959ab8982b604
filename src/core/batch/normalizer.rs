//! Response normalization

use super::types::SubResponseValue;
use crate::core::router::RouteResponse;
use serde_json::Value;
use tracing::debug;

/// Reduce a handler response to the value stored in the batch result.
///
/// Plain-text responses become strings; everything else is read as JSON.
/// A body that is empty or not JSON (a bare status reply, for instance)
/// becomes `null`.
pub fn normalize(response: RouteResponse) -> SubResponseValue {
    if is_plain_text(response.content_type()) {
        return SubResponseValue::PlainText(String::from_utf8_lossy(&response.body).into_owned());
    }

    if response.body.is_empty() {
        return SubResponseValue::Structured(Value::Null);
    }

    match serde_json::from_slice(&response.body) {
        Ok(value) => SubResponseValue::Structured(value),
        Err(e) => {
            debug!(
                status = %response.status,
                content_type = response.content_type().unwrap_or(""),
                "Sub-response body is not JSON ({}), using null",
                e
            );
            SubResponseValue::Structured(Value::Null)
        }
    }
}

/// `text/plain` with any parameters, case-insensitive
fn is_plain_text(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("text/plain"))
}
