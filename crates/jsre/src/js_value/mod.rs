// JavaScript value representation for native library functions
mod js_object;
mod js_value;

pub use js_object::{JsObject, ObjectClass};
pub use js_value::{JsValue, ObjectRef, number_to_string};
