//! Required-field forms of the accessors.
//!
//! The accessors in [`crate::property`] only say "absent". The `require_*`
//! functions run the same accessor and, only when it misses, work out why
//! and return a [`PropertyError`] naming the cause.

use serde_json::{Number, Value};
use tracing::debug;

use crate::kind::{NodeKind, ScalarKind};
use crate::property::{
    get_boolean_property, get_double_property, get_int_property, get_long_property,
    get_number_property, get_property, get_string_property,
};
use crate::PropertyError;

/// Get the child at `key`, failing with the structural cause.
///
/// # Example
///
/// ```
/// use json_property::{require_property, NodeKind, PropertyError};
/// use serde_json::json;
///
/// let doc = json!([1]);
/// assert_eq!(
///     require_property(Some(&doc), "a"),
///     Err(PropertyError::NotAnObject { found: NodeKind::Array })
/// );
/// ```
pub fn require_property<'a>(
    node: Option<&'a Value>,
    key: &str,
) -> Result<&'a Value, PropertyError> {
    if let Some(child) = get_property(node, key) {
        return Ok(child);
    }
    let err = match node {
        None => PropertyError::NoNode,
        Some(value) if !value.is_object() => PropertyError::NotAnObject {
            found: NodeKind::of(value),
        },
        Some(_) => PropertyError::Missing {
            key: key.to_owned(),
        },
    };
    Err(log_failure(key, err))
}

pub fn require_boolean_property(node: Option<&Value>, key: &str) -> Result<bool, PropertyError> {
    require_scalar(node, key, ScalarKind::Boolean, get_boolean_property)
}

pub fn require_string_property<'a>(
    node: Option<&'a Value>,
    key: &str,
) -> Result<&'a str, PropertyError> {
    require_scalar(node, key, ScalarKind::String, get_string_property)
}

pub fn require_number_property<'a>(
    node: Option<&'a Value>,
    key: &str,
) -> Result<&'a Number, PropertyError> {
    require_scalar(node, key, ScalarKind::Number, get_number_property)
}

pub fn require_double_property(node: Option<&Value>, key: &str) -> Result<f64, PropertyError> {
    require_scalar(node, key, ScalarKind::Double, get_double_property)
}

pub fn require_int_property(node: Option<&Value>, key: &str) -> Result<i32, PropertyError> {
    require_scalar(node, key, ScalarKind::Int, get_int_property)
}

pub fn require_long_property(node: Option<&Value>, key: &str) -> Result<i64, PropertyError> {
    require_scalar(node, key, ScalarKind::Long, get_long_property)
}

fn require_scalar<'a, T, F>(
    node: Option<&'a Value>,
    key: &str,
    expected: ScalarKind,
    get: F,
) -> Result<T, PropertyError>
where
    F: FnOnce(Option<&'a Value>, &str) -> Option<T>,
{
    if let Some(v) = get(node, key) {
        return Ok(v);
    }
    let child = require_property(node, key)?;
    let err = PropertyError::WrongKind {
        key: key.to_owned(),
        expected,
        found: NodeKind::of(child),
    };
    Err(log_failure(key, err))
}

fn log_failure(key: &str, err: PropertyError) -> PropertyError {
    debug!(key, error = %err, "required property lookup failed");
    err
}

/// Turn an absent accessor result into [`PropertyError::Missing`].
///
/// For callers composing their own lookups who only need the key in the
/// error.
///
/// ```
/// use json_property::{get_string_property, OptionExt, PropertyError};
/// use serde_json::json;
///
/// let doc = json!({});
/// let err = get_string_property(Some(&doc), "name").or_missing("name");
/// assert_eq!(err, Err(PropertyError::Missing { key: "name".into() }));
/// ```
pub trait OptionExt<T> {
    fn or_missing(self, key: &str) -> Result<T, PropertyError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_missing(self, key: &str) -> Result<T, PropertyError> {
        self.ok_or_else(|| PropertyError::Missing {
            key: key.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_property_causes() {
        let doc = json!({"a": null});
        assert_eq!(require_property(Some(&doc), "a"), Ok(&json!(null)));
        assert_eq!(require_property(None, "a"), Err(PropertyError::NoNode));
        assert_eq!(
            require_property(Some(&json!("x")), "a"),
            Err(PropertyError::NotAnObject {
                found: NodeKind::String
            })
        );
        assert_eq!(
            require_property(Some(&doc), "b"),
            Err(PropertyError::Missing { key: "b".into() })
        );
    }

    #[test]
    fn test_require_scalar_wrong_kind() {
        let doc = json!({"a": null, "b": "x"});
        assert_eq!(
            require_boolean_property(Some(&doc), "a"),
            Err(PropertyError::WrongKind {
                key: "a".into(),
                expected: ScalarKind::Boolean,
                found: NodeKind::Null,
            })
        );
        assert_eq!(
            require_int_property(Some(&doc), "b"),
            Err(PropertyError::WrongKind {
                key: "b".into(),
                expected: ScalarKind::Int,
                found: NodeKind::String,
            })
        );
    }

    #[test]
    fn test_require_scalar_ok() {
        let doc = json!({"a": true, "b": "x", "c": 3.7, "d": -2});
        let node = Some(&doc);
        assert_eq!(require_boolean_property(node, "a"), Ok(true));
        assert_eq!(require_string_property(node, "b"), Ok("x"));
        assert_eq!(require_double_property(node, "c"), Ok(3.7));
        assert_eq!(require_int_property(node, "c"), Ok(3));
        assert_eq!(require_long_property(node, "d"), Ok(-2));
        assert_eq!(require_number_property(node, "d"), Ok(&Number::from(-2)));
    }

    #[test]
    fn test_require_scalar_structural_errors_pass_through() {
        assert_eq!(require_string_property(None, "a"), Err(PropertyError::NoNode));
        assert_eq!(
            require_double_property(Some(&json!({})), "a"),
            Err(PropertyError::Missing { key: "a".into() })
        );
    }

    #[test]
    fn test_or_missing() {
        assert_eq!(Some(1).or_missing("k"), Ok(1));
        assert_eq!(
            None::<i32>.or_missing("k"),
            Err(PropertyError::Missing { key: "k".into() })
        );
    }
}
