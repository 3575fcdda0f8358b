//! Serde serialization support for JS values
//!
//! Converts host values to `serde_json` so match results can be printed or
//! handed to tooling as JSON. Only the value-to-JSON direction exists: the
//! runtime never needs to rebuild RegExp state from JSON.

#[cfg(feature = "serde")]
mod serializer;

#[cfg(feature = "serde")]
use serializer::to_string as serialize_to_json_string;

#[cfg(feature = "serde")]
use crate::js_value::JsValue;

/// Convert a JS value to a JSON string
#[cfg(feature = "serde")]
pub fn js_to_json_string(js_value: &JsValue, pretty: bool) -> Result<String, String> {
    serialize_to_json_string(js_value, pretty)
}
