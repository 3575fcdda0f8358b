pub mod test_interrupt;
pub mod test_regexp;

use crate::js_vm::{EngineOption, Interrupt, JsResult, NoInterrupt};
use crate::stdlib::regexp::pattern;

/// Run the search driver on string inputs; returns `(index, slots)`.
pub fn find_str(
    pat: &str,
    text: &str,
    init: usize,
    ignore_case: bool,
) -> JsResult<Option<(usize, Vec<String>)>> {
    find_str_with(pat, text, init, ignore_case, NoInterrupt)
}

pub fn find_str_with<I: Interrupt>(
    pat: &str,
    text: &str,
    init: usize,
    ignore_case: bool,
    interrupt: I,
) -> JsResult<Option<(usize, Vec<String>)>> {
    let pat: Vec<char> = pat.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let found = pattern::find(
        &pat,
        &text,
        init,
        ignore_case,
        &EngineOption::default(),
        interrupt,
    )?;
    Ok(found.map(|m| {
        let slots = (0..m.slot_count()).filter_map(|i| m.slot_text(&text, i)).collect();
        (m.index(), slots)
    }))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
