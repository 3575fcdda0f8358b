// JavaScript RegExp runtime
// Backtracking regular expressions for a small-footprint JS interpreter

#[cfg(test)]
mod test;

pub mod js_value;
pub mod js_vm;
pub mod stdlib;

#[cfg(feature = "serde")]
pub mod serde;

pub use js_value::{JsObject, JsValue};
pub use js_vm::{EngineOption, Interrupt, JsError, JsResult};
pub use stdlib::regexp::{ExecMatch, RegExp};
