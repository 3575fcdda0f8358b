// Tests for the RegExp class: exec/test, flags and lastIndex
use crate::js_vm::NoInterrupt;
use crate::stdlib::regexp::{regexp_constructor, regexp_exec, regexp_test};
use crate::{JsError, JsValue, RegExp};

#[test]
fn test_global_exec_walks_matches() {
    let mut re = RegExp::new("a", Some("g"));
    for expected in 0..3 {
        let m = re.exec("aaa").unwrap().unwrap();
        assert_eq!(m.index, expected);
        assert_eq!(m.as_str(), "a");
        assert_eq!(re.last_index(), expected + 1);
    }
    assert_eq!(re.exec("aaa").unwrap(), None);
    assert_eq!(re.last_index(), 0);
    // wrapped around: starts over
    assert_eq!(re.exec("aaa").unwrap().unwrap().index, 0);
}

#[test]
fn test_non_global_always_resets() {
    let mut re = RegExp::new("a", None);
    for _ in 0..3 {
        let m = re.exec("aaa").unwrap().unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(re.last_index(), 0);
    }
}

#[test]
fn test_non_global_honours_last_index_as_start() {
    let mut re = RegExp::new("a", None);
    re.set_last_index(2);
    assert_eq!(re.exec("aXa").unwrap().unwrap().index, 2);
    assert_eq!(re.last_index(), 0);
}

#[test]
fn test_test_has_exec_side_effects() {
    let mut re = RegExp::new("o", Some("g"));
    assert!(re.test("foo").unwrap());
    assert_eq!(re.last_index(), 2);
    assert!(re.test("foo").unwrap());
    assert_eq!(re.last_index(), 3);
    assert!(!re.test("foo").unwrap());
    assert_eq!(re.last_index(), 0);
}

#[test]
fn test_behaviour_depends_only_on_state() {
    let mut a = RegExp::new("o", Some("g"));
    let mut b = RegExp::new("o", Some("g"));
    a.test("foo").unwrap();
    a.test("foo").unwrap();
    a.test("foo").unwrap(); // wraps back to 0
    assert_eq!(a.last_index(), b.last_index());
    assert_eq!(a.exec("foo").unwrap(), b.exec("foo").unwrap());
}

#[test]
fn test_ignore_case_flag_and_unknown_flags() {
    let mut re = RegExp::new("HELLO", Some("imy"));
    let m = re.exec("say hello").unwrap().unwrap();
    assert_eq!((m.index, m.as_str()), (4, "hello"));
    assert!(!re.is_global());
}

#[test]
fn test_global_last_index_after_empty_match() {
    let mut re = RegExp::new("x*", Some("g"));
    let m = re.exec("ab").unwrap().unwrap();
    assert_eq!((m.index, m.as_str()), (0, ""));
    assert_eq!(re.last_index(), 0);
}

#[test]
fn test_last_index_past_end() {
    let mut re = RegExp::new("a*", Some("g"));
    re.set_last_index(10);
    assert_eq!(re.exec("aa").unwrap(), None);
    assert_eq!(re.last_index(), 0);
}

#[test]
fn test_match_all() {
    let mut re = RegExp::new("\\d+", Some("g"));
    let all = re.match_all("a1 b22 c333", NoInterrupt).unwrap();
    let got: Vec<(usize, &str)> = all.iter().map(|m| (m.index, m.as_str())).collect();
    assert_eq!(got, vec![(1, "1"), (4, "22"), (8, "333")]);
    assert_eq!(re.last_index(), 0);

    let mut empty = RegExp::new("x*", Some("g"));
    assert_eq!(empty.match_all("ab", NoInterrupt).unwrap().len(), 3);

    let mut single = RegExp::new("\\d", None);
    assert_eq!(single.match_all("12", NoInterrupt).unwrap().len(), 1);
}

#[test]
fn test_malformed_pattern_resets_and_reports() {
    let mut re = RegExp::new("[abc", Some("g"));
    re.set_last_index(1);
    let err = re.exec("abc").unwrap_err();
    assert_eq!(err, JsError::malformed("Unfinished character set in RegEx"));
    assert_eq!(re.last_index(), 0);
    assert!(re.test("").is_err());
}

#[test]
fn test_exec_match_end_counts_characters() {
    let mut re = RegExp::new("ü+", Some("g"));
    let m = re.exec("aüüb").unwrap().unwrap();
    assert_eq!(m.end(), 3);
    assert_eq!(re.last_index(), 3);
}

// ===== Host object bindings =====

#[test]
fn test_constructor_builds_host_object() {
    let re = regexp_constructor(&JsValue::string("a+"), &JsValue::string("g")).unwrap();
    let obj = re.as_object().unwrap().borrow();
    assert_eq!(obj.get("source"), JsValue::string("a+"));
    assert_eq!(obj.get("flags"), JsValue::string("g"));
    assert_eq!(obj.get("lastIndex"), JsValue::integer(0));
}

#[test]
fn test_constructor_without_flags() {
    let re = regexp_constructor(&JsValue::string("a"), &JsValue::undefined()).unwrap();
    assert!(re.as_object().unwrap().borrow().get("flags").is_undefined());
    assert_eq!(re.to_js_string(), "/a/");
}

#[test]
fn test_constructor_type_errors() {
    assert!(matches!(
        regexp_constructor(&JsValue::integer(5), &JsValue::undefined()),
        Err(JsError::TypeError(_))
    ));
    assert!(matches!(
        regexp_constructor(&JsValue::string("a"), &JsValue::boolean(true)),
        Err(JsError::TypeError(_))
    ));
}

#[test]
fn test_host_exec_result_shape() {
    let re = regexp_constructor(&JsValue::string("W(o)rld"), &JsValue::undefined()).unwrap();
    let m = regexp_exec(&re, &JsValue::string("Hello World"), NoInterrupt).unwrap();
    let arr = m.as_object().unwrap().borrow();
    assert_eq!(arr.items()[0], JsValue::string("World"));
    assert_eq!(arr.items()[1], JsValue::string("o"));
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.get("index"), JsValue::integer(6));
    assert_eq!(arr.get("input"), JsValue::string("Hello World"));
}

#[test]
fn test_host_exec_updates_last_index_property() {
    let re = regexp_constructor(&JsValue::string("a"), &JsValue::string("g")).unwrap();
    let subject = JsValue::string("aaa");
    for expected in 1..=3 {
        assert!(regexp_test(&re, &subject, NoInterrupt).unwrap());
        let last = re.as_object().unwrap().borrow().get("lastIndex");
        assert_eq!(last, JsValue::integer(expected));
    }
    let m = regexp_exec(&re, &subject, NoInterrupt).unwrap();
    assert!(m.is_null());
    let last = re.as_object().unwrap().borrow().get("lastIndex");
    assert_eq!(last, JsValue::integer(0));
}

#[test]
fn test_host_exec_reads_rewritten_properties() {
    let re = regexp_constructor(&JsValue::string("b"), &JsValue::undefined()).unwrap();
    {
        let mut obj = re.as_object().unwrap().borrow_mut();
        obj.set("flags", JsValue::string("gi"));
        obj.set("lastIndex", JsValue::string("2"));
    }
    let m = regexp_exec(&re, &JsValue::string("BbB"), NoInterrupt).unwrap();
    assert_eq!(m.as_object().unwrap().borrow().get("index"), JsValue::integer(2));
    let last = re.as_object().unwrap().borrow().get("lastIndex");
    assert_eq!(last, JsValue::integer(3));
}

#[test]
fn test_host_exec_converts_argument_to_string() {
    let re = regexp_constructor(&JsValue::string("\\d\\d"), &JsValue::undefined()).unwrap();
    let m = regexp_exec(&re, &JsValue::integer(1234), NoInterrupt).unwrap();
    assert_eq!(m.as_object().unwrap().borrow().items()[0], JsValue::string("12"));

    let re = regexp_constructor(&JsValue::string("ll"), &JsValue::undefined()).unwrap();
    assert!(regexp_test(&re, &JsValue::null(), NoInterrupt).unwrap());
    assert!(regexp_test(&re, &JsValue::undefined(), NoInterrupt).is_ok_and(|b| !b));
}

#[test]
fn test_host_exec_on_wrong_receiver() {
    let not_re = JsValue::string("a");
    assert!(matches!(
        regexp_exec(&not_re, &JsValue::string("a"), NoInterrupt),
        Err(JsError::TypeError(_))
    ));
    let arr = RegExp::new("a", None).exec("a").unwrap().unwrap().to_js_value();
    assert!(matches!(
        regexp_test(&arr, &JsValue::string("a"), NoInterrupt),
        Err(JsError::TypeError(_))
    ));
}

#[test]
fn test_host_malformed_pattern_resets_property() {
    let re = regexp_constructor(&JsValue::string("x[y"), &JsValue::string("g")).unwrap();
    re.as_object()
        .unwrap()
        .borrow_mut()
        .set("lastIndex", JsValue::integer(2));
    assert!(matches!(
        regexp_exec(&re, &JsValue::string("xyz"), NoInterrupt),
        Err(JsError::MalformedPattern(_))
    ));
    let last = re.as_object().unwrap().borrow().get("lastIndex");
    assert_eq!(last, JsValue::integer(0));
}
