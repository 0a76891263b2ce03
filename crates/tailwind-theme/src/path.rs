//! Theme paths and tree lookup.
//!
//! A [`ThemePath`] is the normalized, ordered list of keys used to walk the
//! theme tree. Every way of naming a path normalizes the same way: each element
//! is split on `.` and the pieces are flattened, so `"card.header"`,
//! `["card", "header"]` and `["card.header"]` all address the same node.
//!
//! ```rust
//! use tailwind_theme::ThemePath;
//!
//! let path = ThemePath::from(["card", "header.title"]);
//! assert_eq!(path.segments(), ["card", "header", "title"]);
//! assert_eq!(path.to_string(), "card.header.title");
//! ```

use std::fmt;

use crate::error::{Result, ThemeError};
use crate::node::Node;

/// A normalized path into a theme tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThemePath {
    segments: Vec<String>,
}

impl ThemePath {
    /// The empty path, which addresses the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Normalizes any sequence of path parts.
    ///
    /// Empty pieces (from `"a..b"` or a trailing dot) are dropped; normalizing
    /// never fails.
    pub fn normalize<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = parts
            .into_iter()
            .flat_map(|part| {
                part.as_ref()
                    .split('.')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walks `tree` along this path.
    ///
    /// Only mapping nodes are indexed; reaching a scalar or sequence before the
    /// path is exhausted is the same as the key being absent. Absent paths
    /// return `Ok(None)` unless `raise` is set, in which case they fail with
    /// [`ThemeError::PathNotFound`].
    pub fn lookup<'t>(&self, tree: &'t Node, raise: bool) -> Result<Option<&'t Node>> {
        let found = self
            .segments
            .iter()
            .try_fold(tree, |node, segment| node.get(segment));

        match found {
            None if raise => Err(ThemeError::PathNotFound {
                path: self.to_string(),
            }),
            found => Ok(found),
        }
    }
}

impl fmt::Display for ThemePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for ThemePath {
    fn from(path: &str) -> Self {
        Self::normalize([path])
    }
}

impl From<String> for ThemePath {
    fn from(path: String) -> Self {
        Self::normalize([path])
    }
}

impl From<&String> for ThemePath {
    fn from(path: &String) -> Self {
        Self::normalize([path])
    }
}

impl<S: AsRef<str>> From<&[S]> for ThemePath {
    fn from(parts: &[S]) -> Self {
        Self::normalize(parts)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ThemePath {
    fn from(parts: [S; N]) -> Self {
        Self::normalize(parts)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ThemePath {
    fn from(parts: Vec<S>) -> Self {
        Self::normalize(parts)
    }
}

impl From<&ThemePath> for ThemePath {
    fn from(path: &ThemePath) -> Self {
        path.clone()
    }
}
