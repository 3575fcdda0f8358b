use crate::js_vm::js_limits::MAXCCALLS_PATTERN;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOption {
    /// Nesting depth at which a search fails closed with
    /// `JsError::PatternTooComplex` instead of exhausting the stack.
    pub max_match_depth: usize,
}

impl Default for EngineOption {
    fn default() -> Self {
        Self {
            max_match_depth: MAXCCALLS_PATTERN,
        }
    }
}

impl EngineOption {
    pub fn with_max_match_depth(mut self, depth: usize) -> Self {
        self.max_match_depth = depth;
        self
    }
}
