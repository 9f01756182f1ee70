//! Optional, type-checked property lookups.
//!
//! Every accessor takes a node that may be absent and a key, and returns
//! `None` unless the node is an object, the key is present, and the value has
//! the requested kind. Each typed accessor builds on the more general one
//! below it, so a miss at any step short-circuits the rest.
//!
//! A key mapped to JSON null is present for [`get_property`] and
//! [`has_property`] but fails every typed accessor.

use serde_json::{Map, Number, Value};

use crate::primitive::Primitive;

/// Get the child at `key` if `node` is an object containing it.
///
/// # Example
///
/// ```
/// use json_property::get_property;
/// use serde_json::json;
///
/// let doc = json!({"a": null});
/// assert_eq!(get_property(Some(&doc), "a"), Some(&json!(null)));
/// assert_eq!(get_property(Some(&doc), "b"), None);
/// assert_eq!(get_property(Some(&json!([1, 2, 3])), "a"), None);
/// assert_eq!(get_property(None, "a"), None);
/// ```
pub fn get_property<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    node.get_property(key)
}

/// Whether `node` is an object with `key`, whatever the value.
pub fn has_property(node: Option<&Value>, key: &str) -> bool {
    node.has_property(key)
}

pub fn get_json_primitive_property<'a>(
    node: Option<&'a Value>,
    key: &str,
) -> Option<Primitive<'a>> {
    node.get_json_primitive_property(key)
}

pub fn get_boolean_property(node: Option<&Value>, key: &str) -> Option<bool> {
    node.get_boolean_property(key)
}

pub fn get_string_property<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a str> {
    node.get_string_property(key)
}

/// Get a number without narrowing it.
///
/// Build with the `arbitrary_precision` feature to keep every literal exact.
pub fn get_number_property<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a Number> {
    node.get_number_property(key)
}

/// Get a number as `f64`. See [`crate::numeric::to_double`].
pub fn get_double_property(node: Option<&Value>, key: &str) -> Option<f64> {
    node.get_double_property(key)
}

/// Get a number as `i32`, truncated toward zero and saturated.
/// See [`crate::numeric::to_int`].
///
/// # Example
///
/// ```
/// use json_property::get_int_property;
/// use serde_json::json;
///
/// let doc = json!({"c": 3.7, "big": 1e12, "s": "3"});
/// assert_eq!(get_int_property(Some(&doc), "c"), Some(3));
/// assert_eq!(get_int_property(Some(&doc), "big"), Some(i32::MAX));
/// assert_eq!(get_int_property(Some(&doc), "s"), None);
/// ```
pub fn get_int_property(node: Option<&Value>, key: &str) -> Option<i32> {
    node.get_int_property(key)
}

/// Get a number as `i64`, truncated toward zero and saturated.
pub fn get_long_property(node: Option<&Value>, key: &str) -> Option<i64> {
    node.get_long_property(key)
}

pub fn get_object_property<'a>(
    node: Option<&'a Value>,
    key: &str,
) -> Option<&'a Map<String, Value>> {
    node.get_object_property(key)
}

pub fn get_array_property<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a [Value]> {
    node.get_array_property(key)
}

/// Method-call form of the accessors.
///
/// Implemented for `&Value`, `&Map<String, Value>` and their `Option`s, so
/// lookups chain through nested objects whether the previous step returned
/// a node or an object:
///
/// ```
/// use json_property::JsonPropertyExt;
/// use serde_json::json;
///
/// let doc = json!({"source": {"meta": {"resolution": 4}}});
/// let resolution = doc
///     .get_property("source")
///     .get_property("meta")
///     .get_int_property("resolution");
/// assert_eq!(resolution, Some(4));
///
/// let meta = doc.get_object_property("source").get_object_property("meta");
/// assert_eq!(meta.get_int_property("resolution"), Some(4));
/// assert_eq!(doc.get_property("nope").get_int_property("resolution"), None);
/// ```
pub trait JsonPropertyExt<'a>: Sized {
    /// The object to look keys up in, or `None` when `self` is absent or
    /// not an object.
    fn as_json_object(self) -> Option<&'a Map<String, Value>>;

    fn get_property(self, key: &str) -> Option<&'a Value> {
        self.as_json_object()?.get(key)
    }

    fn has_property(self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    fn get_json_primitive_property(self, key: &str) -> Option<Primitive<'a>> {
        self.get_property(key).and_then(Primitive::from_value)
    }

    fn get_boolean_property(self, key: &str) -> Option<bool> {
        self.get_json_primitive_property(key)?.as_boolean()
    }

    fn get_string_property(self, key: &str) -> Option<&'a str> {
        self.get_json_primitive_property(key)?.as_str()
    }

    fn get_number_property(self, key: &str) -> Option<&'a Number> {
        self.get_json_primitive_property(key)?.as_number()
    }

    fn get_double_property(self, key: &str) -> Option<f64> {
        self.get_json_primitive_property(key)?.as_double()
    }

    fn get_int_property(self, key: &str) -> Option<i32> {
        self.get_json_primitive_property(key)?.as_int()
    }

    fn get_long_property(self, key: &str) -> Option<i64> {
        self.get_json_primitive_property(key)?.as_long()
    }

    fn get_object_property(self, key: &str) -> Option<&'a Map<String, Value>> {
        self.get_property(key)?.as_object()
    }

    fn get_array_property(self, key: &str) -> Option<&'a [Value]> {
        self.get_property(key)?.as_array().map(Vec::as_slice)
    }
}

impl<'a> JsonPropertyExt<'a> for &'a Value {
    fn as_json_object(self) -> Option<&'a Map<String, Value>> {
        Value::as_object(self)
    }
}

impl<'a> JsonPropertyExt<'a> for Option<&'a Value> {
    fn as_json_object(self) -> Option<&'a Map<String, Value>> {
        self?.as_object()
    }
}

impl<'a> JsonPropertyExt<'a> for &'a Map<String, Value> {
    fn as_json_object(self) -> Option<&'a Map<String, Value>> {
        Some(self)
    }
}

impl<'a> JsonPropertyExt<'a> for Option<&'a Map<String, Value>> {
    fn as_json_object(self) -> Option<&'a Map<String, Value>> {
        self
    }
}
