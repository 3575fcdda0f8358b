//! Centralized RegExp limits and configuration constants.
//!
//! All magic numbers that bound the matcher's memory and stack use are
//! collected here so a port to a smaller target only has to touch one file.

// ===== Captures =====

/// Number of capturing groups recorded per match. Groups opened past this
/// count still match, they are just not reported.
pub const MAX_GROUPS: usize = 9;

// ===== Recursion =====

/// Default maximum nesting of matcher calls. Every quantified atom nests one
/// level, so this is roughly "quantifiers per pattern".
pub const MAXCCALLS_PATTERN: usize = 200;

// ===== Flags =====

/// Flag letter enabling case-insensitive matching.
pub const FLAG_IGNORE_CASE: char = 'i';

/// Flag letter enabling global scanning through `lastIndex`.
pub const FLAG_GLOBAL: char = 'g';
