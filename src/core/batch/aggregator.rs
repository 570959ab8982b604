//! Result aggregation

use super::types::SubResponseValue;
use serde_json::{Map, Value};

/// Build the outbound payload `{"responses": [...]}`, keeping input order
pub fn aggregate(values: Vec<SubResponseValue>) -> Value {
    let responses = values.into_iter().map(Value::from).collect();

    let mut payload = Map::new();
    payload.insert("responses".to_string(), Value::Array(responses));
    Value::Object(payload)
}
