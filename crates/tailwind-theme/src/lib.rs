//! # Tailwind Theme - Composable Tailwind CSS Class Presets
//!
//! `tailwind-theme` resolves named style presets from a nested theme tree into
//! a single merged class string. Presets are addressed by dotted path and can
//! vary with the state of a runtime object.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: An immutable theme tree with its merge and missing-path policies
//! - [`Node`]: Scalar class strings, sequences and ordered mappings
//! - [`ThemePath`]: A normalized path (`"card.header"`, `["card", "header"]`)
//! - Object themes: mappings whose `base` always applies and whose other keys
//!   select classes by subject attribute
//! - [`AttributeSource`]: Anything an object theme can be applied to
//! - [`ClassMerger`]: The final conflict-resolution step, applied once per call
//!
//! ## Quick Start
//!
//! ```rust
//! use tailwind_theme::{ResolveOptions, Theme};
//!
//! let theme = Theme::from_yaml(r#"
//! basic: basic-classes
//! multipart:
//!   key: multi-part-key
//! "#).unwrap();
//!
//! let none = ResolveOptions::new();
//! assert_eq!(theme.css("multipart.key", &none).unwrap(), "multi-part-key");
//! assert_eq!(
//!     theme.css("multipart.key", &ResolveOptions::new().append("p-6")).unwrap(),
//!     "multi-part-key p-6"
//! );
//! assert_eq!(theme.css("foo.bar", &none).unwrap(), "missing-foo-bar");
//! ```
//!
//! ## Object Themes
//!
//! ```rust
//! use tailwind_theme::{ResolveOptions, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::from_yaml(r#"
//! complex:
//!   base: complex-base
//!   boolean:
//!     base: boolean
//!     true: boolean-true
//!     false: boolean-false
//! "#).unwrap();
//!
//! let subject = json!({ "boolean": false });
//! let options = ResolveOptions::new().subject(&subject);
//! assert_eq!(
//!     theme.css("complex", &options).unwrap(),
//!     "complex-base boolean boolean-false"
//! );
//!
//! // Attribute overrides win over the subject.
//! let options = options.attribute("boolean", true);
//! assert_eq!(
//!     theme.css("complex", &options).unwrap(),
//!     "complex-base boolean boolean-true"
//! );
//! ```
//!
//! ## Combining Paths
//!
//! [`Theme::merge_css`] resolves several paths and merges the combined string
//! once. With the default [`TailwindMerger`], a utility from a later path
//! replaces a conflicting one from an earlier path:
//!
//! ```rust
//! # #[cfg(feature = "tailwind-merge")] {
//! use tailwind_theme::{ResolveOptions, Theme};
//!
//! let theme = Theme::from_yaml("card: rounded p-4\ncompact: p-2").unwrap();
//! let classes = theme.merge_css(["card", "compact"], &ResolveOptions::new()).unwrap();
//! assert_eq!(classes, "rounded p-2");
//! # }
//! ```
//!
//! Without the `tailwind-merge` feature the default is [`DedupMerger`], which
//! drops exact duplicates and leaves conflicting utilities in place.

mod error;
pub mod merge;
mod missing;
pub mod node;
mod options;
mod path;
pub mod prelude;
mod process;
pub mod source;
mod subject;
mod theme;

/// The object-theme key whose classes always apply.
pub const BASE_KEY: &str = "base";

/// The variant key selected by a null attribute value.
pub const NIL_KEY: &str = "nil";

pub use error::{Result, ThemeError};
pub use merge::{ClassMerger, DedupMerger, Verbatim};
#[cfg(feature = "tailwind-merge")]
pub use merge::TailwindMerger;
pub use missing::MissingClassname;
pub use node::{Mapping, Node};
pub use options::ResolveOptions;
pub use path::ThemePath;
pub use subject::{AttributeSource, SerializedSubject};
pub use theme::Theme;
