// Core RegExp matching engine: direct interpretation, no AST
//
// - The pattern is a `&[char]` walked with index arithmetic; each position is
//   reinterpreted on the fly as literal, class, group delimiter, quantifier
//   or anchor.
// - `match_impl` recursively walks the pattern with backtracking.
// - Per-branch capture state (`Groups`) is a small `Copy` value handed down
//   by value, so forking a branch never needs undo logic.
// - `MatchState` only carries what every branch shares: the pattern, depth,
//   and the halt reason once the search has to unwind.

use super::class::{UNFINISHED_SET, singlematch};
use super::cursor::Cursor;
use crate::js_vm::js_limits::MAX_GROUPS;
use crate::js_vm::{EngineOption, Interrupt, JsError, JsResult};

/// Validate a pattern before matching: every `[` must be closed.
fn validate_pattern(pat: &[char]) -> JsResult<()> {
    let mut i = 0;
    while i < pat.len() {
        match pat[i] {
            '\\' => i += 2,
            '[' => i = validate_set(pat, i)?,
            _ => i += 1,
        }
    }
    Ok(())
}

/// Validate a [set] starting at pat[i] (i points to '['). Returns index past ']'.
fn validate_set(pat: &[char], i: usize) -> JsResult<usize> {
    let mut j = i + 1;
    while j < pat.len() && pat[j] != ']' {
        if pat[j] == '\\' {
            j += 1; // skip escaped char
        }
        j += 1;
    }
    if j >= pat.len() {
        return Err(JsError::malformed(UNFINISHED_SET));
    }
    Ok(j + 1)
}

/// Capture bookkeeping for one branch of the search.
///
/// Groups are counted, not stacked: `)` always ends the most recently
/// opened slot, so in `((a)b)` the inner `)` ends slot 2 and the outer one
/// moves that end again while slot 1 keeps its empty span.
#[derive(Debug, Clone, Copy)]
struct Groups {
    count: usize,
    start: [usize; MAX_GROUPS],
    end: [usize; MAX_GROUPS],
}

impl Groups {
    fn new() -> Self {
        Self {
            count: 0,
            start: [0; MAX_GROUPS],
            end: [0; MAX_GROUPS],
        }
    }

    /// A `(` past the last slot is matched but not recorded.
    #[inline]
    fn open(&mut self, at: usize) {
        if self.count >= MAX_GROUPS {
            return;
        }
        let n = self.count;
        self.start[n] = at;
        self.end[n] = at;
        self.count = n + 1;
    }

    /// A `)` before any `(` ends nothing.
    #[inline]
    fn close(&mut self, at: usize) {
        if let Some(n) = self.count.checked_sub(1) {
            self.end[n] = at;
        }
    }
}

/// Why a search stopped before exhausting its alternatives.
#[derive(Debug)]
enum Halt {
    Interrupted,
    Error(JsError),
}

/// Match state shared by every branch of one search
struct MatchState<'a, I: Interrupt> {
    pat: &'a [char],
    ignore_case: bool,
    depth: usize,
    max_depth: usize,
    interrupt: I,
    halt: Option<Halt>,
}

impl<'a, I: Interrupt> MatchState<'a, I> {
    fn new(pat: &'a [char], ignore_case: bool, option: &EngineOption, interrupt: I) -> Self {
        Self {
            pat,
            ignore_case,
            depth: 0,
            max_depth: option.max_match_depth,
            interrupt,
            halt: None,
        }
    }

    #[inline]
    fn reset(&mut self) {
        self.depth = 0;
        self.halt = None;
    }

    /// Classify the atom at `pp`; a hard error is parked in `halt`.
    #[inline]
    fn single(&mut self, c: Option<char>, pp: usize) -> Option<(bool, usize)> {
        match singlematch(c, self.pat, pp, self.ignore_case) {
            Ok(r) => Some(r),
            Err(e) => {
                self.halt = Some(Halt::Error(e));
                None
            }
        }
    }
}

/// Span of the overall match and of each recorded group, in character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Slot 0 is the whole match, slots 1..=group_count the groups
    spans: [(usize, usize); MAX_GROUPS + 1],
    group_count: usize,
}

impl MatchResult {
    fn found(start: usize, end: usize, groups: &Groups) -> Self {
        let mut spans = [(0, 0); MAX_GROUPS + 1];
        spans[0] = (start, end);
        for i in 0..groups.count {
            spans[i + 1] = (groups.start[i], groups.end[i]);
        }
        Self {
            spans,
            group_count: groups.count,
        }
    }

    /// Absolute start of the overall match.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.spans[0].0
    }

    /// End of the overall match (exclusive).
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.spans[0].1
    }

    /// Number of slots: the overall match plus each recorded group.
    #[inline(always)]
    pub fn slot_count(&self) -> usize {
        self.group_count + 1
    }

    #[inline(always)]
    pub fn get(&self, slot: usize) -> Option<(usize, usize)> {
        if slot <= self.group_count {
            Some(self.spans[slot])
        } else {
            None
        }
    }

    /// Text of `slot` cut out of the subject the match was made on.
    pub fn slot_text(&self, text: &[char], slot: usize) -> Option<String> {
        self.get(slot).map(|(s, e)| text[s..e].iter().collect())
    }
}

/// Try to match the pattern from `pp` against the subject at `it`.
/// Returns the finished match on success.
///
/// Every call polls the interrupt first; once `ms.halt` is set, all callers
/// up the stack return `None` without trying anything else.
fn match_impl<I: Interrupt>(
    ms: &mut MatchState<'_, I>,
    it: Cursor<'_>,
    pp: usize,
    start: usize,
    groups: Groups,
) -> Option<MatchResult> {
    if ms.halt.is_some() {
        return None;
    }
    ms.depth += 1;
    if ms.depth > ms.max_depth {
        log::warn!("regexp recursion limit {} reached", ms.max_depth);
        ms.halt = Some(Halt::Error(JsError::PatternTooComplex));
        ms.depth -= 1;
        return None;
    }
    let result = match_inner(ms, it, pp, start, groups);
    ms.depth -= 1;
    result
}

fn match_inner<I: Interrupt>(
    ms: &mut MatchState<'_, I>,
    mut it: Cursor<'_>,
    mut pp: usize,
    start: usize,
    mut groups: Groups,
) -> Option<MatchResult> {
    // Sequential elements loop instead of recursing; each turn is one step
    loop {
        if ms.interrupt.is_interrupted() {
            ms.halt = Some(Halt::Interrupted);
            return None;
        }
        if pp >= ms.pat.len() {
            return Some(MatchResult::found(start, it.index(), &groups));
        }

        match ms.pat[pp] {
            '(' => {
                groups.open(it.index());
                pp += 1;
                continue;
            }
            ')' => {
                groups.close(it.index());
                pp += 1;
                continue;
            }
            _ => {}
        }

        let (matched, len) = ms.single(it.get_char(), pp)?;
        let ep = pp + len; // index past the atom

        if let Some(&op) = ms.pat.get(ep)
            && (op == '*' || op == '+')
        {
            return match_repeat(ms, it, pp, ep + 1, matched, op == '+', start, groups);
        }

        if ms.pat[pp] == '$' && ep == ms.pat.len() {
            // End anchor: succeed only if the subject is exhausted
            return if it.has_char() {
                None
            } else {
                Some(MatchResult::found(start, it.index(), &groups))
            };
        }

        if it.has_char() && matched {
            it.next();
            pp = ep;
            continue;
        }
        return None;
    }
}

/// Repetition (`*`, `+`) of the atom at `pp`; `rp` is the rest of the pattern.
///
/// Tries the rest after every achievable repetition count, from the minimum
/// upward, and keeps the last success: the longest run wins, but a shorter
/// count is never revisited for the benefit of a later element.
#[allow(clippy::too_many_arguments)]
fn match_repeat<I: Interrupt>(
    ms: &mut MatchState<'_, I>,
    mut it: Cursor<'_>,
    pp: usize,
    rp: usize,
    mut matched: bool,
    at_least_one: bool,
    start: usize,
    groups: Groups,
) -> Option<MatchResult> {
    if !matched && at_least_one {
        return None;
    }

    let mut last = None;
    if !at_least_one {
        last = match_impl(ms, it, rp, start, groups);
        if ms.halt.is_some() {
            return None;
        }
    }

    while it.has_char() && matched {
        it.next();
        matched = ms.single(it.get_char(), pp)?.0;
        if let Some(m) = match_impl(ms, it, rp, start, groups) {
            last = Some(m);
        }
        if ms.halt.is_some() {
            return None;
        }
    }
    last
}

/// Search `text` for `pat`, trying successive start offsets from `init`.
///
/// A leading `^` pins the search to `init` alone. An interrupted search is
/// `Ok(None)`, same as an exhausted one.
pub fn find<I: Interrupt>(
    pat: &[char],
    text: &[char],
    init: usize,
    ignore_case: bool,
    option: &EngineOption,
    interrupt: I,
) -> JsResult<Option<MatchResult>> {
    validate_pattern(pat)?;
    if init > text.len() {
        return Ok(None);
    }

    let anchored = pat.first() == Some(&'^');
    let pp_start = if anchored { 1 } else { 0 };

    let mut ms = MatchState::new(pat, ignore_case, option, interrupt);
    let mut si = init;
    loop {
        log::trace!("regexp attempt at offset {}", si);
        ms.reset();
        let it = Cursor::new(text, si);
        if let Some(m) = match_impl(&mut ms, it, pp_start, si, Groups::new()) {
            return Ok(Some(m));
        }
        match ms.halt.take() {
            Some(Halt::Interrupted) => {
                log::debug!("regexp search interrupted at offset {}", si);
                return Ok(None);
            }
            Some(Halt::Error(e)) => return Err(e),
            None => {}
        }
        // an attempt is made at the empty suffix too
        if anchored || si >= text.len() {
            return Ok(None);
        }
        si += 1;
    }
}
