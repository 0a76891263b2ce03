//! Class names substituted for paths the theme does not define.

use std::fmt;
use std::sync::Arc;

use crate::path::ThemePath;

type MissingFn = dyn Fn(&[String]) -> Option<String> + Send + Sync;

/// What a non-strict lookup of an absent path resolves to.
///
/// The default marks the hole in the rendered markup so it is easy to spot:
///
/// ```rust
/// use tailwind_theme::{MissingClassname, ThemePath};
///
/// let path = ThemePath::from("test.path");
/// assert_eq!(MissingClassname::Default.resolve(&path).as_deref(), Some("missing-test-path"));
/// assert_eq!(MissingClassname::Disabled.resolve(&path), None);
/// ```
#[derive(Clone, Default)]
pub enum MissingClassname {
    /// `missing-` followed by the path segments joined with `-`.
    #[default]
    Default,
    /// Absent paths contribute nothing.
    Disabled,
    /// The same class string for every absent path.
    Fixed(String),
    /// A callback receiving the normalized path segments.
    Custom(Arc<MissingFn>),
}

impl MissingClassname {
    /// Wraps a callback as a [`MissingClassname::Custom`] policy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> Option<String> + Send + Sync + 'static,
    {
        MissingClassname::Custom(Arc::new(f))
    }

    /// Returns the class string for `path`, or `None` to contribute nothing.
    pub fn resolve(&self, path: &ThemePath) -> Option<String> {
        match self {
            MissingClassname::Default => Some(format!("missing-{}", path.segments().join("-"))),
            MissingClassname::Disabled => None,
            MissingClassname::Fixed(classes) => Some(classes.clone()),
            MissingClassname::Custom(f) => f(path.segments()),
        }
    }
}

impl fmt::Debug for MissingClassname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingClassname::Default => f.write_str("Default"),
            MissingClassname::Disabled => f.write_str("Disabled"),
            MissingClassname::Fixed(classes) => f.debug_tuple("Fixed").field(classes).finish(),
            MissingClassname::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl From<bool> for MissingClassname {
    fn from(enabled: bool) -> Self {
        if enabled {
            MissingClassname::Default
        } else {
            MissingClassname::Disabled
        }
    }
}

impl From<&str> for MissingClassname {
    fn from(classes: &str) -> Self {
        MissingClassname::Fixed(classes.to_string())
    }
}

impl From<String> for MissingClassname {
    fn from(classes: String) -> Self {
        MissingClassname::Fixed(classes)
    }
}
