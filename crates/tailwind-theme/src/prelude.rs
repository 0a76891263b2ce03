//! Convenient imports for common usage.
//!
//! ```rust
//! use tailwind_theme::prelude::*;
//!
//! let theme = Theme::from_yaml("badge: rounded-full px-2").unwrap();
//! assert_eq!(theme.css("badge", &ResolveOptions::new()).unwrap(), "rounded-full px-2");
//! ```

pub use crate::{
    AttributeSource, ClassMerger, MissingClassname, Node, ResolveOptions, SerializedSubject,
    Theme, ThemeError, ThemePath,
};
