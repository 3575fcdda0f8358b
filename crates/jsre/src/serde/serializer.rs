//! Serializer for converting JS values to serde_json::Value
//!
//! - undefined, null, NaN and infinities -> JSON null
//! - boolean, string -> same
//! - integral numbers -> JSON integer, others -> JSON float
//! - array without named properties -> JSON array
//! - anything else (match results included) -> JSON object, ordinal slots
//!   first under "0", "1", ... then named properties in insertion order
use crate::js_value::{JsValue, ObjectClass};
use serde_json::{Map, Number, Value as JsonValue};
use std::collections::HashSet;
use std::rc::Rc;

/// Convert a JS value to a serde_json::Value
pub fn to_value(js_value: &JsValue) -> Result<JsonValue, String> {
    let mut visited = HashSet::new();
    to_value_internal(js_value, &mut visited)
}

/// Convert a JS value to a JSON string
pub fn to_string(js_value: &JsValue, pretty: bool) -> Result<String, String> {
    let json_value = to_value(js_value)?;

    if pretty {
        serde_json::to_string_pretty(&json_value)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e))
    } else {
        serde_json::to_string(&json_value).map_err(|e| format!("Failed to serialize to JSON: {}", e))
    }
}

fn to_value_internal(js_value: &JsValue, visited: &mut HashSet<usize>) -> Result<JsonValue, String> {
    match js_value {
        JsValue::Undefined | JsValue::Null => Ok(JsonValue::Null),
        JsValue::Boolean(b) => Ok(JsonValue::Bool(*b)),
        JsValue::Number(n) => {
            let n = *n;
            if n.fract() == 0.0 && n.is_finite() && n.abs() < 9.007_199_254_740_992e15 {
                Ok(JsonValue::Number(Number::from(n as i64)))
            } else {
                // NaN and infinities have no JSON form
                Ok(Number::from_f64(n)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null))
            }
        }
        JsValue::String(s) => Ok(JsonValue::String(s.to_string())),
        JsValue::Object(obj) => {
            // Check for circular reference
            let ptr_addr = Rc::as_ptr(obj) as usize;
            if !visited.insert(ptr_addr) {
                return Err("Circular reference detected in object".to_string());
            }

            let obj_ref = obj.borrow();
            let plain_array = obj_ref.is_class(ObjectClass::Array) || !obj_ref.is_empty();
            let result = if obj_ref.keys().next().is_none() && plain_array {
                let mut arr = Vec::with_capacity(obj_ref.len());
                for item in obj_ref.items() {
                    arr.push(to_value_internal(item, visited)?);
                }
                JsonValue::Array(arr)
            } else {
                let mut map = Map::new();
                for (i, item) in obj_ref.items().iter().enumerate() {
                    map.insert(i.to_string(), to_value_internal(item, visited)?);
                }
                for key in obj_ref.keys() {
                    map.insert(key.to_string(), to_value_internal(&obj_ref.get(key), visited)?);
                }
                JsonValue::Object(map)
            };

            visited.remove(&ptr_addr);
            Ok(result)
        }
    }
}
