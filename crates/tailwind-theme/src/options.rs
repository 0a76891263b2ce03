//! Per-call resolution options.

use std::fmt;

use serde_json::{Map, Value};

use crate::subject::AttributeSource;

/// Options for a single [`Theme::css`](crate::Theme::css) call.
///
/// Options borrow the subject, so they are built fresh for each call:
///
/// ```rust
/// use tailwind_theme::ResolveOptions;
/// use serde_json::json;
///
/// let button = json!({ "primary": true });
/// let options = ResolveOptions::new()
///     .subject(&button)
///     .attribute("disabled", false)
///     .append("mt-2");
/// ```
#[derive(Clone, Default)]
pub struct ResolveOptions<'a> {
    raise: bool,
    subject: Option<&'a dyn AttributeSource>,
    attributes: Option<Map<String, Value>>,
    prepend: Option<String>,
    append: Option<String>,
}

impl<'a> ResolveOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`ThemeError::PathNotFound`](crate::ThemeError::PathNotFound)
    /// instead of substituting the missing class name.
    pub fn raise(mut self, raise: bool) -> Self {
        self.raise = raise;
        self
    }

    /// Sets the object that object themes query for attribute values.
    pub fn subject(mut self, subject: &'a dyn AttributeSource) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Adds one attribute override. Overrides win over the subject.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds attribute overrides in bulk.
    ///
    /// An empty iterator still counts as supplying attributes, so object
    /// themes resolve (with only their `base`) instead of failing.
    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = self.attributes.get_or_insert_with(Map::new);
        for (name, value) in attributes {
            map.insert(name.into(), value.into());
        }
        self
    }

    /// Literal classes placed before the resolved ones.
    pub fn prepend(mut self, classes: impl Into<String>) -> Self {
        self.prepend = Some(classes.into());
        self
    }

    /// Literal classes placed after the resolved ones.
    pub fn append(mut self, classes: impl Into<String>) -> Self {
        self.append = Some(classes.into());
        self
    }

    pub fn raises(&self) -> bool {
        self.raise
    }

    pub fn prepended(&self) -> Option<&str> {
        self.prepend.as_deref()
    }

    pub fn appended(&self) -> Option<&str> {
        self.append.as_deref()
    }

    /// True when object themes can be applied.
    pub(crate) fn has_context(&self) -> bool {
        self.subject.is_some() || self.attributes.is_some()
    }

    /// Answers an attribute: overrides first, then the subject.
    ///
    /// `None` means neither knows the attribute.
    pub(crate) fn answer(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.attributes.as_ref().and_then(|map| map.get(name)) {
            return Some(value.clone());
        }
        self.subject.and_then(|subject| subject.attribute(name))
    }
}

impl fmt::Debug for ResolveOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("raise", &self.raise)
            .field("subject", &self.subject.map(|_| "<subject>"))
            .field("attributes", &self.attributes)
            .field("prepend", &self.prepend)
            .field("append", &self.append)
            .finish()
    }
}
