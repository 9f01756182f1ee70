//! Borrowed view of a JSON scalar.

use serde_json::{Number, Value};

use crate::kind::NodeKind;
use crate::numeric;

/// A boolean, number, or string borrowed from a JSON tree.
///
/// JSON null is not a primitive: [`Primitive::from_value`] returns `None` for
/// it, as it does for objects and arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive<'a> {
    Bool(bool),
    Number(&'a Number),
    String(&'a str),
}

impl<'a> Primitive<'a> {
    /// View `value` as a primitive.
    ///
    /// # Example
    ///
    /// ```
    /// use json_property::Primitive;
    /// use serde_json::json;
    ///
    /// let v = json!("x");
    /// assert_eq!(Primitive::from_value(&v), Some(Primitive::String("x")));
    /// assert_eq!(Primitive::from_value(&json!(null)), None);
    /// assert_eq!(Primitive::from_value(&json!([1])), None);
    /// ```
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Primitive::Bool(*b)),
            Value::Number(n) => Some(Primitive::Number(n)),
            Value::String(s) => Some(Primitive::String(s)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Primitive::Bool(_) => NodeKind::Boolean,
            Primitive::Number(_) => NodeKind::Number,
            Primitive::String(_) => NodeKind::String,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Primitive::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Primitive::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Primitive::String(_))
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Primitive::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Primitive::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number as parsed, without narrowing.
    pub fn as_number(&self) -> Option<&'a Number> {
        match self {
            Primitive::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        self.as_number().and_then(numeric::to_double)
    }

    pub fn as_int(&self) -> Option<i32> {
        self.as_number().and_then(numeric::to_int)
    }

    pub fn as_long(&self) -> Option<i64> {
        self.as_number().and_then(numeric::to_long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_rejects_non_scalars() {
        assert_eq!(Primitive::from_value(&json!(null)), None);
        assert_eq!(Primitive::from_value(&json!({})), None);
        assert_eq!(Primitive::from_value(&json!([])), None);
    }

    #[test]
    fn test_bool() {
        let v = json!(true);
        let p = Primitive::from_value(&v).unwrap();
        assert!(p.is_boolean());
        assert!(!p.is_number());
        assert!(!p.is_string());
        assert_eq!(p.as_boolean(), Some(true));
        assert_eq!(p.as_str(), None);
        assert_eq!(p.as_number(), None);
        assert_eq!(p.as_double(), None);
        assert_eq!(p.kind(), NodeKind::Boolean);
    }

    #[test]
    fn test_string_is_not_numeric() {
        // A numeric-looking string stays a string.
        let v = json!("3");
        let p = Primitive::from_value(&v).unwrap();
        assert!(p.is_string());
        assert_eq!(p.as_str(), Some("3"));
        assert_eq!(p.as_int(), None);
        assert_eq!(p.as_double(), None);
    }

    #[test]
    fn test_number() {
        let v = json!(3.7);
        let p = Primitive::from_value(&v).unwrap();
        assert!(p.is_number());
        assert_eq!(p.as_number(), v.as_number());
        assert_eq!(p.as_double(), Some(3.7));
        assert_eq!(p.as_int(), Some(3));
        assert_eq!(p.as_long(), Some(3));
        assert_eq!(p.as_boolean(), None);
    }
}
