//! Subjects: the objects an object theme is applied to.
//!
//! Object themes pick branches by asking a subject for attribute values by
//! name. Anything can be a subject by implementing [`AttributeSource`]:
//!
//! ```rust
//! use tailwind_theme::AttributeSource;
//! use serde_json::Value;
//!
//! struct Button {
//!     primary: bool,
//!     size: &'static str,
//! }
//!
//! impl AttributeSource for Button {
//!     fn attribute(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "primary" => Some(Value::Bool(self.primary)),
//!             "size" => Some(Value::from(self.size)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```
//!
//! Types that implement `Serialize` can skip the manual impl by going through
//! [`SerializedSubject`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ThemeError};

/// A source of attribute values for object-theme resolution.
///
/// Returning `None` means the subject does not expose the attribute at all, and
/// the object theme skips that key. `Some(Value::Null)` means the attribute
/// exists but has no value, which selects the `nil` branch.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl AttributeSource for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl AttributeSource for HashMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Non-object JSON values expose no attributes.
impl AttributeSource for Value {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name).cloned())
    }
}

/// A subject captured by serializing a value to JSON.
///
/// Struct fields become attributes; unit enum variants serialize as strings
/// and so select branches by variant name.
///
/// ```rust
/// use serde::Serialize;
/// use tailwind_theme::{AttributeSource, SerializedSubject};
///
/// #[derive(Serialize)]
/// struct Alert {
///     level: &'static str,
///     dismissible: bool,
/// }
///
/// let subject = SerializedSubject::new(&Alert { level: "warn", dismissible: true }).unwrap();
/// assert_eq!(subject.attribute("level"), Some("warn".into()));
/// assert_eq!(subject.attribute("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializedSubject {
    fields: Map<String, Value>,
}

impl SerializedSubject {
    /// Serializes `value`. Anything that does not serialize to a JSON object
    /// yields a subject without attributes.
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| ThemeError::Subject {
            message: e.to_string(),
        })?;
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { fields })
    }
}

impl AttributeSource for SerializedSubject {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

/// Returns the mapping key an attribute value selects.
pub(crate) fn variant_key(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(crate::NIL_KEY),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Only null and `false` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
