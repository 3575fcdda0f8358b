// Host object: ordinal slots plus a table of named properties.
//
// Arrays use the slots; match results use both (captures in the slots,
// `index`/`input` as named properties); RegExp objects only use names.

use std::fmt;

use ahash::AHashMap;
use smol_str::SmolStr;

use super::js_value::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Object,
    Array,
    RegExp,
}

impl ObjectClass {
    pub fn name(self) -> &'static str {
        match self {
            ObjectClass::Object => "Object",
            ObjectClass::Array => "Array",
            ObjectClass::RegExp => "RegExp",
        }
    }
}

#[derive(Clone)]
pub struct JsObject {
    class: ObjectClass,
    items: Vec<JsValue>,
    props: AHashMap<SmolStr, JsValue>,
    /// Property names in insertion order, for printing
    order: Vec<SmolStr>,
}

impl JsObject {
    pub fn new(class: ObjectClass) -> Self {
        Self {
            class,
            items: Vec::new(),
            props: AHashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn new_array(capacity: usize) -> Self {
        let mut obj = Self::new(ObjectClass::Array);
        obj.items.reserve(capacity);
        obj
    }

    #[inline(always)]
    pub fn class(&self) -> ObjectClass {
        self.class
    }

    #[inline(always)]
    pub fn is_class(&self, class: ObjectClass) -> bool {
        self.class == class
    }

    /// Named property, `undefined` when absent.
    pub fn get(&self, key: &str) -> JsValue {
        self.props.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: JsValue) {
        match self.props.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                let key = SmolStr::new(key);
                self.order.push(key.clone());
                self.props.insert(key, value);
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &SmolStr> {
        self.order.iter()
    }

    #[inline(always)]
    pub fn items(&self) -> &[JsValue] {
        &self.items
    }

    pub fn push(&mut self, value: JsValue) {
        self.items.push(value);
    }

    /// `length` of an array.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for JsObject {
    /// Console notation, e.g. `["Wo", index: 6, input: "Hello World"]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.class {
            ObjectClass::Array => ('[', ']'),
            _ => ('{', '}'),
        };
        write!(f, "{}", open)?;
        let mut first = true;
        for item in &self.items {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{:?}", item)?;
        }
        for key in &self.order {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {:?}", key, self.get(key))?;
        }
        write!(f, "{}", close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_keep_insertion_order() {
        let mut obj = JsObject::new(ObjectClass::Object);
        obj.set("b", JsValue::integer(1));
        obj.set("a", JsValue::integer(2));
        obj.set("b", JsValue::integer(3));
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(obj.get("b"), JsValue::integer(3));
        assert!(obj.get("missing").is_undefined());
    }

    #[test]
    fn test_debug_console_notation() {
        let mut arr = JsObject::new_array(1);
        arr.push(JsValue::string("Wo"));
        arr.set("index", JsValue::integer(6));
        arr.set("input", JsValue::string("Hello World"));
        assert_eq!(
            format!("{:?}", arr),
            r#"["Wo", index: 6, input: "Hello World"]"#
        );
    }
}
