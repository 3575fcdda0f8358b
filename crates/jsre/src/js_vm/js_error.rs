/// Errors raised to the caller of a RegExp operation.
///
/// Cancellation is deliberately absent: an interrupted search is reported as
/// "no match", not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsError {
    /// Wrong-typed argument or receiver
    TypeError(String),
    /// Pattern text that cannot be interpreted, e.g. an unterminated `[`
    MalformedPattern(String),
    /// Match recursion went past `EngineOption::max_match_depth`
    PatternTooComplex,
}

impl JsError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        JsError::TypeError(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        JsError::MalformedPattern(msg.into())
    }

    /// Name of the JavaScript error class this maps onto.
    pub fn name(&self) -> &'static str {
        match self {
            JsError::TypeError(_) => "TypeError",
            JsError::MalformedPattern(_) | JsError::PatternTooComplex => "Error",
        }
    }
}

impl std::fmt::Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsError::TypeError(msg) => write!(f, "TypeError: {}", msg),
            JsError::MalformedPattern(msg) => write!(f, "Error: {}", msg),
            JsError::PatternTooComplex => write!(f, "Error: RegEx too complex"),
        }
    }
}

impl std::error::Error for JsError {}
