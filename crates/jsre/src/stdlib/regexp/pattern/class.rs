// Character class matching for RegExp patterns
// Handles `.`, \d \D \s \S \w \W, control escapes, \xHH, [set] and a-z ranges

use crate::js_vm::{JsError, JsResult};

pub const UNFINISHED_SET: &str = "Unfinished character set in RegEx";

/// Fold a character for case-insensitive comparison. Characters whose
/// lowercase form is more than one character are left alone.
#[inline]
pub fn fold(c: char, ignore_case: bool) -> char {
    if !ignore_case {
        return c;
    }
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[inline(always)]
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Is `cl` the letter of a class escape (`\d`, `\S`, ...)?
#[inline(always)]
pub fn is_class_letter(cl: char) -> bool {
    matches!(cl, 'd' | 'D' | 's' | 'S' | 'w' | 'W')
}

/// Check a character against a class escape letter. Uppercase letters invert.
#[inline(always)]
pub fn match_class(c: char, cl: char) -> bool {
    match cl {
        'd' => c.is_ascii_digit(),
        'D' => !c.is_ascii_digit(),
        's' => c.is_whitespace(),
        'S' => !c.is_whitespace(),
        'w' => is_word(c),
        'W' => !is_word(c),
        _ => false,
    }
}

#[inline]
fn hex_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Decode the character an escape at `pat[pp]` (a `\`) stands for, together
/// with the number of pattern characters it spans.
///
/// Class escapes are not handled here; callers check `is_class_letter` first.
pub fn escape_code(pat: &[char], pp: usize) -> (char, usize) {
    let Some(&cl) = pat.get(pp + 1) else {
        // lone trailing backslash
        return ('\\', 1);
    };
    match cl {
        'n' => ('\n', 2),
        'r' => ('\r', 2),
        't' => ('\t', 2),
        'f' => ('\x0C', 2),
        'v' => ('\x0B', 2),
        '0' => ('\0', 2),
        'x' => {
            let hi = pat.get(pp + 2).copied().and_then(hex_value);
            let lo = pat.get(pp + 3).copied().and_then(hex_value);
            match (hi, lo) {
                // two hex digits always fit in a char
                (Some(hi), Some(lo)) => (char::from_u32((hi << 4) | lo).unwrap_or('x'), 4),
                _ => ('x', 2),
            }
        }
        other => (other, 2),
    }
}

/// Character code of a single set member at `pat[i]`, plus its length.
#[inline]
fn set_code(pat: &[char], i: usize) -> (char, usize) {
    if pat[i] == '\\' {
        escape_code(pat, i)
    } else {
        (pat[i], 1)
    }
}

#[inline(always)]
fn literal_eq(c: Option<char>, code: char, ignore_case: bool) -> bool {
    c.is_some_and(|c| fold(c, ignore_case) == fold(code, ignore_case))
}

/// Match the subject character `c` against the single atom at `pat[pp]`.
///
/// Returns whether it matched and how many pattern characters the atom
/// spans. `c` is `None` once the subject is exhausted; no atom matches
/// there, but the span is still reported so callers can step past it.
pub fn singlematch(
    c: Option<char>,
    pat: &[char],
    pp: usize,
    ignore_case: bool,
) -> JsResult<(bool, usize)> {
    match pat[pp] {
        '.' => Ok((c.is_some(), 1)),
        '[' => matchset(c, pat, pp, ignore_case),
        '\\' => match pat.get(pp + 1) {
            Some(&cl) if is_class_letter(cl) => Ok((c.is_some_and(|c| match_class(c, cl)), 2)),
            _ => {
                let (code, len) = escape_code(pat, pp);
                Ok((literal_eq(c, code, ignore_case), len))
            }
        },
        lit => Ok((literal_eq(c, lit, ignore_case), 1)),
    }
}

/// Match `c` against a `[set]` starting at `pat[pp]` (pp points to `[`).
fn matchset(
    c: Option<char>,
    pat: &[char],
    pp: usize,
    ignore_case: bool,
) -> JsResult<(bool, usize)> {
    let mut i = pp + 1; // skip '['
    let negated = i < pat.len() && pat[i] == '^';
    if negated {
        i += 1;
    }

    let folded = c.map(|c| fold(c, ignore_case));
    let mut matched = false;

    while i < pat.len() && pat[i] != ']' {
        if pat[i] == '\\' && pat.get(i + 1).is_some_and(|&cl| is_class_letter(cl)) {
            if c.is_some_and(|c| match_class(c, pat[i + 1])) {
                matched = true;
            }
            i += 2;
            continue;
        }

        let (low, len) = set_code(pat, i);
        i += len;

        let is_range = i + 1 < pat.len()
            && pat[i] == '-'
            && pat[i + 1] != ']'
            && !(pat[i + 1] == '\\' && pat.get(i + 2).is_some_and(|&cl| is_class_letter(cl)));
        if is_range {
            // Range: a-z, compared on folded characters
            let (high, len) = set_code(pat, i + 1);
            i += 1 + len;
            let low = fold(low, ignore_case);
            let high = fold(high, ignore_case);
            if let Some(ch) = folded
                && low < high
                && ch >= low
                && ch <= high
            {
                matched = true;
            }
        } else if folded.is_some_and(|ch| ch == fold(low, ignore_case)) {
            matched = true;
        }
    }

    if i >= pat.len() {
        return Err(JsError::malformed(UNFINISHED_SET));
    }
    let hit = c.is_some() && (matched != negated);
    Ok((hit, i + 1 - pp))
}
