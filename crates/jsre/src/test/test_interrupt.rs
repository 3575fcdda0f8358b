// Tests for cooperative cancellation
use super::{find_str, find_str_with, init_logger};
use crate::js_vm::{EngineOption, InterruptFlag, StepBudget};
use crate::RegExp;

#[test]
fn test_interrupt_before_first_step_is_no_match() {
    let budget = StepBudget::new(0);
    assert_eq!(find_str_with("abc", "abc", 0, false, &budget).unwrap(), None);
    assert_eq!(budget.polled(), 1);
}

#[test]
fn test_raised_flag_is_no_match() {
    let flag = InterruptFlag::new();
    flag.raise();
    assert_eq!(find_str_with("a", "a", 0, false, &flag).unwrap(), None);
    flag.clear();
    assert!(find_str_with("a", "a", 0, false, &flag).unwrap().is_some());
}

#[test]
fn test_interrupt_mid_quantifier_discards_recorded_success() {
    // x* records a success at zero repetitions immediately; cutting the
    // search off afterwards must not surface it
    let total = StepBudget::new(u64::MAX);
    assert!(find_str_with("x*", "xxxx", 0, false, &total).unwrap().is_some());
    let steps = total.polled();
    assert!(steps > 3);

    let budget = StepBudget::new(3);
    assert_eq!(find_str_with("x*", "xxxx", 0, false, &budget).unwrap(), None);
}

#[test]
fn test_pathological_pattern_returns_promptly() {
    init_logger();
    // nested quantifiers on a subject that never matches
    let pat = "a*".repeat(12) + "b";
    let text = "a".repeat(30);
    let budget = StepBudget::new(10_000);
    assert_eq!(find_str_with(&pat, &text, 0, false, &budget).unwrap(), None);
    // unwinds right after the budget runs out instead of finishing the search
    assert_eq!(budget.polled(), 10_001);
}

#[test]
fn test_interrupted_exec_resets_last_index() {
    let mut re = RegExp::new("a", Some("g"));
    re.set_last_index(1);
    let budget = StepBudget::new(0);
    assert_eq!(re.exec_with("aaa", &budget).unwrap(), None);
    assert_eq!(re.last_index(), 0);
}

#[test]
fn test_interrupted_search_is_not_an_error() {
    let mut re = RegExp::new("(a*)*b", None)
        .with_option(EngineOption::default().with_max_match_depth(50));
    let budget = StepBudget::new(5);
    assert!(!re.test_with("aaa*b", &budget).unwrap());
    // a quantifier right after ')' is a literal
    assert!(re.test("aaa*b").unwrap());
    assert!(find_str("(a*)*b", "aaab", 0, false).unwrap().is_none());
}
