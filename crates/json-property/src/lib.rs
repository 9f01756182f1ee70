//! Optional, type-checked property lookups over `serde_json` values.
//!
//! Reading a persisted document whose shape is only partly known means asking
//! the same questions at every field: is this node an object, does it have the
//! key, is the value the kind I want. The accessors here answer all three in
//! one call and return `None` when any answer is no. They never panic.
//!
//! A node that may itself be absent is an `Option<&Value>`. That is distinct
//! from a present `Value::Null`, although both make every typed accessor
//! return `None`.
//!
//! # Example
//!
//! ```
//! use json_property::{get_boolean_property, get_double_property, get_int_property,
//!     get_property, get_string_property};
//! use serde_json::json;
//!
//! let doc = json!({"a": true, "b": "x", "c": 3.7, "d": null});
//! let node = Some(&doc);
//!
//! assert_eq!(get_boolean_property(node, "a"), Some(true));
//! assert_eq!(get_string_property(node, "b"), Some("x"));
//! assert_eq!(get_double_property(node, "c"), Some(3.7));
//! assert_eq!(get_int_property(node, "c"), Some(3));
//! assert_eq!(get_boolean_property(node, "d"), None);
//! assert_eq!(get_string_property(node, "e"), None);
//! assert_eq!(get_property(Some(&json!([1, 2, 3])), "a"), None);
//! ```
//!
//! For required fields, the `require_*` functions return a [`PropertyError`]
//! describing why the lookup missed.

use thiserror::Error;

pub mod kind;
pub use kind::{NodeKind, ScalarKind};

pub mod numeric;

pub mod primitive;
pub use primitive::Primitive;

pub mod property;
pub use property::{
    get_array_property, get_boolean_property, get_double_property, get_int_property,
    get_json_primitive_property, get_long_property, get_number_property, get_object_property,
    get_property, get_string_property, has_property, JsonPropertyExt,
};

pub mod required;
pub use required::{
    require_boolean_property, require_double_property, require_int_property,
    require_long_property, require_number_property, require_property, require_string_property,
    OptionExt,
};

/// Why a required property could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("no JSON node to read a property from")]
    NoNode,
    #[error("expected an object, found {found}")]
    NotAnObject { found: NodeKind },
    #[error("missing property `{key}`")]
    Missing { key: String },
    #[error("property `{key}`: expected {expected}, found {found}")]
    WrongKind {
        key: String,
        expected: ScalarKind,
        found: NodeKind,
    },
}
