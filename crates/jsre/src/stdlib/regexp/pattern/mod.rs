// RegExp pattern matching: character-oriented, zero-AST design
//
// 1. NO AST / compile phase: the pattern text is interpreted during matching
// 2. Fixed-size group slots (9): extra groups match but are not recorded
// 3. Per-branch capture state is copied, never shared, so backtracking has
//    nothing to undo
// 4. Recursion is bounded and polls a cooperative interrupt on every step

mod class;
mod cursor;
mod engine;

pub use class::{fold, match_class, singlematch};
pub use cursor::Cursor;
pub use engine::{MatchResult, find};
