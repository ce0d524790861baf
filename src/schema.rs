//! JSON Schema for the logger options document

use schemars::schema_for;
use serde_json::Value;

use crate::options::Options;

/// Schema describing the JSON accepted by [`Options::from_json`].
pub fn options_schema() -> Value {
    let schema = schema_for!(Options);
    serde_json::to_value(&schema).unwrap_or(Value::Null)
}
