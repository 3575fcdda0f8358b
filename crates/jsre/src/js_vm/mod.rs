// Runtime plumbing shared by the standard library: errors, limits,
// tunable options and cooperative cancellation.
pub mod engine_option;
pub mod interrupt;
pub mod js_error;
pub mod js_limits;

pub use engine_option::EngineOption;
pub use interrupt::{Deadline, Interrupt, InterruptFlag, NoInterrupt, StepBudget};
pub use js_error::JsError;

pub type JsResult<T> = Result<T, JsError>;
