use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use super::js_object::{JsObject, ObjectClass};

/// Shared handle to a host object. The interpreter is single-threaded.
pub type ObjectRef = Rc<RefCell<JsObject>>;

/// A JavaScript value as seen by native library functions.
#[derive(Clone, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(SmolStr),
    Object(ObjectRef),
}

impl JsValue {
    #[inline(always)]
    pub const fn undefined() -> Self {
        JsValue::Undefined
    }

    #[inline(always)]
    pub const fn null() -> Self {
        JsValue::Null
    }

    #[inline(always)]
    pub const fn boolean(b: bool) -> Self {
        JsValue::Boolean(b)
    }

    #[inline(always)]
    pub fn number(n: f64) -> Self {
        JsValue::Number(n)
    }

    #[inline(always)]
    pub fn integer(i: i64) -> Self {
        JsValue::Number(i as f64)
    }

    #[inline(always)]
    pub fn string(s: impl Into<SmolStr>) -> Self {
        JsValue::String(s.into())
    }

    pub fn object(obj: JsObject) -> Self {
        JsValue::Object(Rc::new(RefCell::new(obj)))
    }

    #[inline(always)]
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            JsValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// `typeof`-style name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "null",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Object(_) => "object",
        }
    }

    /// JavaScript `ToString`.
    pub fn to_js_string(&self) -> SmolStr {
        match self {
            JsValue::Undefined => SmolStr::new_static("undefined"),
            JsValue::Null => SmolStr::new_static("null"),
            JsValue::Boolean(true) => SmolStr::new_static("true"),
            JsValue::Boolean(false) => SmolStr::new_static("false"),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::Object(o) => object_to_string(&o.borrow()),
        }
    }

    /// Integer view used for index-like properties such as `lastIndex`:
    /// numeric strings are parsed, fractions truncate, negatives and
    /// non-numbers clamp to 0.
    pub fn to_index(&self) -> usize {
        let n = match self {
            JsValue::Number(n) => *n,
            JsValue::Boolean(b) => *b as u8 as f64,
            JsValue::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if n.is_nan() || n <= 0.0 {
            0
        } else if n >= usize::MAX as f64 {
            usize::MAX
        } else {
            n as usize
        }
    }
}

/// Number formatting for `ToString`: integral values print without a
/// fraction, everything else in shortest round-trip form.
pub fn number_to_string(n: f64) -> SmolStr {
    if n.is_nan() {
        return SmolStr::new_static("NaN");
    }
    if n.is_infinite() {
        return if n > 0.0 {
            SmolStr::new_static("Infinity")
        } else {
            SmolStr::new_static("-Infinity")
        };
    }
    if n == n.trunc() && n.abs() < 1e15 {
        let mut buf = itoa::Buffer::new();
        return SmolStr::new(buf.format(n as i64));
    }
    SmolStr::new(format!("{}", n))
}

fn object_to_string(obj: &JsObject) -> SmolStr {
    match obj.class() {
        ObjectClass::Array => {
            let parts: Vec<SmolStr> = obj
                .items()
                .iter()
                .map(|v| match v {
                    JsValue::Undefined | JsValue::Null => SmolStr::default(),
                    v => v.to_js_string(),
                })
                .collect();
            SmolStr::new(parts.join(","))
        }
        ObjectClass::RegExp => {
            let source = obj.get("source").to_js_string();
            let flags = obj.get("flags");
            let flags = flags.as_str().unwrap_or("");
            SmolStr::new(format!("/{}/{}", source, flags))
        }
        ObjectClass::Object => SmolStr::new_static("[object Object]"),
    }
}

impl PartialEq for JsValue {
    /// Strict equality; objects compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) | (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::String(s) => write!(f, "{:?}", s.as_str()),
            JsValue::Object(o) => write!(f, "{:?}", o.borrow()),
            other => f.write_str(&other.to_js_string()),
        }
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::string(s)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}
