//! Kind tags for JSON nodes and for the scalar kinds the accessors extract.

use serde_json::Value;
use std::fmt;

/// The structural kind of a present JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// Classify a node.
    ///
    /// # Example
    ///
    /// ```
    /// use json_property::NodeKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(NodeKind::of(&json!({"a": 1})), NodeKind::Object);
    /// assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Boolean,
            Value::Null => NodeKind::Null,
        }
    }

    /// Boolean, number, or string. Null is not a primitive.
    pub fn is_primitive(self) -> bool {
        matches!(self, NodeKind::String | NodeKind::Number | NodeKind::Boolean)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scalar kinds a typed accessor can extract.
///
/// `Number` keeps the literal as a [`serde_json::Number`]; `Double`, `Int`
/// and `Long` narrow it, see [`crate::numeric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    String,
    Number,
    Double,
    Int,
    Long,
}

impl ScalarKind {
    /// The node kind a value must have to be read as this scalar kind.
    pub fn node_kind(self) -> NodeKind {
        match self {
            ScalarKind::Boolean => NodeKind::Boolean,
            ScalarKind::String => NodeKind::String,
            ScalarKind::Number | ScalarKind::Double | ScalarKind::Int | ScalarKind::Long => {
                NodeKind::Number
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Double => "double",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
