// RegExp class
// Implements: constructor, exec, test, plus the `lastIndex` / global-flag
// state machine shared by the typed API and the host-object bindings.
pub mod pattern;

use smol_str::SmolStr;

use crate::js_value::{JsObject, JsValue, ObjectClass};
use crate::js_vm::js_limits::{FLAG_GLOBAL, FLAG_IGNORE_CASE};
use crate::js_vm::{EngineOption, Interrupt, JsError, JsResult, NoInterrupt};

/// A regular expression together with its scan position.
///
/// `last_index` is where the next `exec` starts. It moves past each match
/// when the `g` flag is set and falls back to 0 whenever a call does not
/// produce a global match.
#[derive(Debug, Clone)]
pub struct RegExp {
    source: SmolStr,
    flags: Option<SmolStr>,
    pattern: Vec<char>,
    last_index: usize,
    option: EngineOption,
}

/// Result of a successful `exec`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExecMatch {
    /// Character offset of the match in `input`
    pub index: usize,
    /// Slot 0 is the matched text, then one entry per recorded group
    pub captures: Vec<SmolStr>,
    pub input: SmolStr,
}

impl ExecMatch {
    /// The whole matched text.
    pub fn as_str(&self) -> &str {
        self.captures.first().map(SmolStr::as_str).unwrap_or("")
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.captures.get(slot).map(SmolStr::as_str)
    }

    /// Character offset just past the match.
    pub fn end(&self) -> usize {
        self.index + self.as_str().chars().count()
    }

    /// Build the script-visible result: an array of captures carrying
    /// `index` and `input` properties.
    pub fn to_js_value(&self) -> JsValue {
        let mut arr = JsObject::new_array(self.captures.len());
        for cap in &self.captures {
            arr.push(JsValue::String(cap.clone()));
        }
        arr.set("index", JsValue::integer(self.index as i64));
        arr.set("input", JsValue::String(self.input.clone()));
        JsValue::object(arr)
    }
}

impl RegExp {
    pub fn new(source: &str, flags: Option<&str>) -> Self {
        Self {
            source: SmolStr::new(source),
            flags: flags.map(SmolStr::new),
            pattern: source.chars().collect(),
            last_index: 0,
            option: EngineOption::default(),
        }
    }

    pub fn with_option(mut self, option: EngineOption) -> Self {
        self.option = option;
        self
    }

    #[inline(always)]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline(always)]
    pub fn flags(&self) -> Option<&str> {
        self.flags.as_deref()
    }

    #[inline(always)]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn set_last_index(&mut self, index: usize) {
        self.last_index = index;
    }

    /// Does the flags string contain `flag`? Unknown letters are ignored.
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.as_ref().is_some_and(|f| f.contains(flag))
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.has_flag(FLAG_GLOBAL)
    }

    #[inline]
    pub fn ignore_case(&self) -> bool {
        self.has_flag(FLAG_IGNORE_CASE)
    }

    pub fn exec(&mut self, subject: &str) -> JsResult<Option<ExecMatch>> {
        self.exec_with(subject, NoInterrupt)
    }

    /// Search `subject` from `last_index`, then update `last_index`:
    /// past the match for a global match, 0 for anything else (including
    /// errors and interruption).
    pub fn exec_with<I: Interrupt>(
        &mut self,
        subject: &str,
        interrupt: I,
    ) -> JsResult<Option<ExecMatch>> {
        let text: Vec<char> = subject.chars().collect();
        let start = self.last_index;
        let found = pattern::find(
            &self.pattern,
            &text,
            start,
            self.ignore_case(),
            &self.option,
            interrupt,
        );

        let found = match found {
            Ok(found) => found,
            Err(e) => {
                self.last_index = 0;
                return Err(e);
            }
        };

        let Some(m) = found else {
            log::debug!("exec /{}/ from {}: no match", self.source, start);
            self.last_index = 0;
            return Ok(None);
        };

        self.last_index = if self.is_global() { m.end() } else { 0 };
        log::debug!(
            "exec /{}/ from {}: match at {}..{}, lastIndex -> {}",
            self.source,
            start,
            m.index(),
            m.end(),
            self.last_index
        );

        let captures = (0..m.slot_count())
            .filter_map(|slot| m.slot_text(&text, slot))
            .map(SmolStr::from)
            .collect();
        Ok(Some(ExecMatch {
            index: m.index(),
            captures,
            input: SmolStr::new(subject),
        }))
    }

    pub fn test(&mut self, subject: &str) -> JsResult<bool> {
        self.test_with(subject, NoInterrupt)
    }

    /// `exec` reduced to a boolean, with the same `last_index` effects.
    pub fn test_with<I: Interrupt>(&mut self, subject: &str, interrupt: I) -> JsResult<bool> {
        Ok(self.exec_with(subject, interrupt)?.is_some())
    }

    /// Every match from the start of `subject`: repeated `exec` for a global
    /// RegExp, a single `exec` otherwise. Empty matches step one character
    /// forward so the scan always terminates. `last_index` ends at 0.
    pub fn match_all<I: Interrupt>(
        &mut self,
        subject: &str,
        interrupt: I,
    ) -> JsResult<Vec<ExecMatch>> {
        let mut matches = Vec::new();
        self.last_index = 0;
        while let Some(m) = self.exec_with(subject, &interrupt)? {
            let empty = m.captures.first().is_none_or(|s| s.is_empty());
            matches.push(m);
            if !self.is_global() {
                break;
            }
            if empty {
                self.last_index += 1;
            }
        }
        self.last_index = 0;
        Ok(matches)
    }

    /// Script-visible RegExp object carrying `source`, `flags` and `lastIndex`.
    pub fn to_js_value(&self) -> JsValue {
        let mut obj = JsObject::new(ObjectClass::RegExp);
        obj.set("source", JsValue::String(self.source.clone()));
        if let Some(flags) = &self.flags {
            obj.set("flags", JsValue::String(flags.clone()));
        }
        obj.set("lastIndex", JsValue::integer(self.last_index as i64));
        JsValue::object(obj)
    }

    /// Read the state of a script-visible RegExp object.
    pub fn from_js_value(value: &JsValue) -> JsResult<Self> {
        let Some(obj) = value.as_object() else {
            return Err(JsError::type_error(format!(
                "Expecting RegExp, got {}",
                value.type_name()
            )));
        };
        let obj = obj.borrow();
        if !obj.is_class(ObjectClass::RegExp) {
            return Err(JsError::type_error(format!(
                "Expecting RegExp, got {}",
                obj.class().name()
            )));
        }
        let source = obj.get("source");
        let Some(source) = source.as_str() else {
            return Err(JsError::type_error("RegExp source is not a String"));
        };
        // non-string flags count as no flags
        let flags = obj.get("flags");
        let mut re = RegExp::new(source, flags.as_str());
        re.last_index = obj.get("lastIndex").to_index();
        Ok(re)
    }
}

fn expect_string<'a>(value: &'a JsValue, position: &str) -> JsResult<&'a str> {
    value.as_str().ok_or_else(|| {
        JsError::type_error(format!(
            "Expecting String as {} argument, got {}",
            position,
            value.type_name()
        ))
    })
}

/// `new RegExp(pattern [, flags])`
pub fn regexp_constructor(pattern: &JsValue, flags: &JsValue) -> JsResult<JsValue> {
    let source = expect_string(pattern, "first")?;
    let flags = if flags.is_undefined() {
        None
    } else {
        Some(expect_string(flags, "second")?)
    };
    Ok(RegExp::new(source, flags).to_js_value())
}

/// `RegExp.prototype.exec(str)` - match array or `null`
pub fn regexp_exec<I: Interrupt>(this: &JsValue, arg: &JsValue, interrupt: I) -> JsResult<JsValue> {
    let mut re = RegExp::from_js_value(this)?;
    let subject = arg.to_js_string();
    let result = re.exec_with(&subject, interrupt);
    if let Some(obj) = this.as_object() {
        obj.borrow_mut()
            .set("lastIndex", JsValue::integer(re.last_index() as i64));
    }
    Ok(match result? {
        Some(m) => m.to_js_value(),
        None => JsValue::null(),
    })
}

/// `RegExp.prototype.test(str)`
pub fn regexp_test<I: Interrupt>(this: &JsValue, arg: &JsValue, interrupt: I) -> JsResult<bool> {
    let v = regexp_exec(this, arg, interrupt)?;
    Ok(!v.is_null())
}
