//! The `Theme`: a theme tree plus the policies used to resolve it.
//!
//! # Construction Methods
//!
//! ## From YAML
//!
//! ```rust
//! use tailwind_theme::{ResolveOptions, Theme};
//!
//! let theme = Theme::from_yaml(r#"
//! button:
//!   base: rounded px-4 py-2
//!   primary:
//!     true: bg-blue-600 text-white
//!     false: bg-gray-100 text-gray-900
//! "#).unwrap();
//!
//! let options = ResolveOptions::new().attribute("primary", true);
//! assert_eq!(
//!     theme.css("button", &options).unwrap(),
//!     "rounded px-4 py-2 bg-blue-600 text-white"
//! );
//! ```
//!
//! ## From a file
//!
//! ```rust,ignore
//! let theme = Theme::from_file("./themes/app.yml.j2")?;
//! assert_eq!(theme.name(), Some("app"));
//! ```
//!
//! # Policies
//!
//! The merge step and the class name used for absent paths are configured per
//! theme with [`with_merger`](Theme::with_merger) and
//! [`with_missing_classname`](Theme::with_missing_classname).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::merge::{default_merger, ClassMerger};
use crate::missing::MissingClassname;
use crate::node::Node;
use crate::options::ResolveOptions;
use crate::path::ThemePath;
use crate::process::{expand, join};
use crate::source::{self, Format};

/// An immutable theme tree with its merge and missing-path policies.
///
/// A `Theme` is `Send + Sync`; resolve from as many threads as you like.
#[derive(Clone)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    tree: Node,
    merger: Arc<dyn ClassMerger>,
    missing: MissingClassname,
}

impl Theme {
    /// Wraps a tree with the default policies.
    pub fn new(tree: Node) -> Self {
        Self {
            name: None,
            source_path: None,
            tree,
            merger: default_merger(),
            missing: MissingClassname::Default,
        }
    }

    /// Creates a theme from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        source::parse(yaml, Format::Yaml, None).map(Self::new)
    }

    /// Creates a theme from JSON content.
    pub fn from_json(json: &str) -> Result<Self> {
        source::parse(json, Format::Json, None).map(Self::new)
    }

    /// Loads a theme file.
    ///
    /// The theme name is derived from the filename without its extensions.
    /// The source path is stored for [`refresh`](Theme::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read, expanded or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let loaded = source::load_file(path)?;
        Ok(Self {
            name: loaded.name,
            source_path: Some(path.to_path_buf()),
            ..Self::new(loaded.tree)
        })
    }

    /// Reloads the tree from the source file, keeping the policies.
    pub fn refresh(&mut self) -> Result<()> {
        let path = self.source_path.as_ref().ok_or(ThemeError::NoSource)?;
        self.tree = source::load_file(path)?.tree;
        Ok(())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the class merger.
    ///
    /// The default is [`TailwindMerger`](crate::TailwindMerger) with the
    /// `tailwind-merge` feature and [`DedupMerger`](crate::DedupMerger) without.
    pub fn with_merger<M: ClassMerger + 'static>(mut self, merger: M) -> Self {
        self.merger = Arc::new(merger);
        self
    }

    /// Replaces the policy for absent paths.
    pub fn with_missing_classname(mut self, missing: impl Into<MissingClassname>) -> Self {
        self.missing = missing.into();
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Resolves `path` to a merged class string.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::PathNotFound`] if `options` raises and the path is absent
    /// - [`ThemeError::MissingContext`] if an object theme is reached without a
    ///   subject or attributes
    pub fn css(&self, path: impl Into<ThemePath>, options: &ResolveOptions<'_>) -> Result<String> {
        let classes = self.build(&path.into(), options)?;
        Ok(self.finish([classes.as_str()], options))
    }

    /// Like [`css`](Theme::css), failing on absent paths.
    pub fn css_strict(
        &self,
        path: impl Into<ThemePath>,
        options: &ResolveOptions<'_>,
    ) -> Result<String> {
        self.css(path, &options.clone().raise(true))
    }

    /// Resolves several paths and merges the combined classes once.
    ///
    /// `prepend` and `append` wrap the combined list, not each path.
    pub fn merge_css<I>(&self, paths: I, options: &ResolveOptions<'_>) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<ThemePath>,
    {
        let built = paths
            .into_iter()
            .map(|path| self.build(&path.into(), options))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(built.iter().map(String::as_str), options))
    }

    /// Like [`merge_css`](Theme::merge_css), failing on absent paths.
    pub fn merge_css_strict<I>(&self, paths: I, options: &ResolveOptions<'_>) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<ThemePath>,
    {
        self.merge_css(paths, &options.clone().raise(true))
    }

    /// Returns true if the path exists, even when it holds an empty value.
    pub fn contains(&self, path: impl Into<ThemePath>) -> bool {
        self.get(path).is_some()
    }

    /// Returns the raw node at `path`.
    pub fn get(&self, path: impl Into<ThemePath>) -> Option<&Node> {
        let path: ThemePath = path.into();
        path.lookup(&self.tree, false).ok().flatten()
    }

    /// Expands one path into its joined, unmerged classes.
    fn build(&self, path: &ThemePath, options: &ResolveOptions<'_>) -> Result<String> {
        match path.lookup(&self.tree, options.raises())? {
            Some(node) => {
                let mut fragments = Vec::new();
                expand(node, options, &mut fragments)?;
                Ok(join(fragments))
            }
            None => {
                debug!(path = %path, "theme path missing, using fallback class name");
                Ok(self.missing.resolve(path).unwrap_or_default())
            }
        }
    }

    fn finish<'s, I>(&self, classes: I, options: &'s ResolveOptions<'_>) -> String
    where
        I: IntoIterator<Item = &'s str>,
    {
        let joined = join(
            options
                .prepended()
                .into_iter()
                .chain(classes)
                .chain(options.appended()),
        );
        self.merger.merge(&joined)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Node::empty())
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("source_path", &self.source_path)
            .field("tree", &self.tree)
            .field("missing", &self.missing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::from_yaml(
            r#"
            basic: basic-classes
            multipart:
              key: multi-part-key
            empty: ""
            complex:
              base: complex-base
              boolean:
                base: boolean
                true: boolean-true
                false: boolean-false
            "#,
        )
        .unwrap()
    }

    #[test]
    fn css_scalar() {
        assert_eq!(theme().css("basic", &ResolveOptions::new()).unwrap(), "basic-classes");
    }

    #[test]
    fn css_nested_string_and_array_paths() {
        let theme = theme();
        let options = ResolveOptions::new();
        assert_eq!(theme.css("multipart.key", &options).unwrap(), "multi-part-key");
        assert_eq!(theme.css(["multipart", "key"], &options).unwrap(), "multi-part-key");
    }

    #[test]
    fn css_prepend_and_append() {
        let theme = theme();
        assert_eq!(
            theme
                .css("multipart.key", &ResolveOptions::new().append("p-6"))
                .unwrap(),
            "multi-part-key p-6"
        );
        assert_eq!(
            theme
                .css("multipart.key", &ResolveOptions::new().prepend("p-6"))
                .unwrap(),
            "p-6 multi-part-key"
        );
    }

    #[test]
    fn css_missing_uses_fallback() {
        let theme = theme();
        assert_eq!(theme.css("foo.bar", &ResolveOptions::new()).unwrap(), "missing-foo-bar");

        let quiet = theme.with_missing_classname(false);
        assert_eq!(quiet.css("foo.bar", &ResolveOptions::new()).unwrap(), "");
    }

    #[test]
    fn css_strict_raises() {
        let err = theme()
            .css_strict("test.path", &ResolveOptions::new())
            .unwrap_err();
        assert!(matches!(err, ThemeError::PathNotFound { ref path } if path == "test.path"));
    }

    #[test]
    fn css_object_theme_requires_context() {
        let err = theme().css("complex", &ResolveOptions::new()).unwrap_err();
        assert!(matches!(err, ThemeError::MissingContext));
    }

    #[test]
    fn css_object_theme_with_attributes() {
        let theme = theme();
        assert_eq!(
            theme
                .css("complex", &ResolveOptions::new().attribute("boolean", false))
                .unwrap(),
            "complex-base boolean boolean-false"
        );
        assert_eq!(
            theme
                .css("complex", &ResolveOptions::new().attribute("boolean", true))
                .unwrap(),
            "complex-base boolean boolean-true"
        );
    }

    #[test]
    fn merge_css_merges_once_after_concatenation() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let theme = theme().with_merger(move |classes: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            classes.to_string()
        });

        let options = ResolveOptions::new().attribute("boolean", false);
        let merged = theme.merge_css(["basic", "complex"], &options).unwrap();

        assert_eq!(merged, "basic-classes complex-base boolean boolean-false");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn merge_css_wraps_combined_list() {
        let options = ResolveOptions::new().prepend("first").append("last");
        assert_eq!(
            theme().merge_css(["basic", "multipart.key"], &options).unwrap(),
            "first basic-classes multi-part-key last"
        );
    }

    #[test]
    fn merge_css_strict_raises_on_any_missing() {
        let err = theme()
            .merge_css_strict(["basic", "test.path"], &ResolveOptions::new())
            .unwrap_err();
        assert!(matches!(err, ThemeError::PathNotFound { .. }));
    }

    #[test]
    fn contains_and_get() {
        let theme = theme();
        assert!(theme.contains("complex"));
        assert!(theme.contains("empty"));
        assert!(!theme.contains(["foo", "bar"]));
        assert_eq!(theme.get("basic"), Some(&Node::from("basic-classes")));
        assert_eq!(theme.get("foo"), None);
        assert_eq!(theme.get(""), Some(theme.tree()));
    }

    #[test]
    fn merger_sees_full_class_string() {
        let theme = Theme::from_yaml("a: p-2 m-1\nb: p-4").unwrap().with_merger(
            |classes: &str| classes.replace("p-2 ", ""),
        );
        assert_eq!(
            theme.merge_css(["a", "b"], &ResolveOptions::new()).unwrap(),
            "m-1 p-4"
        );
    }

    #[cfg(feature = "tailwind-merge")]
    #[test]
    fn default_merger_resolves_conflicts_across_paths() {
        let theme = Theme::from_yaml("card: rounded p-4\ncompact: p-2").unwrap();
        assert_eq!(
            theme.merge_css(["card", "compact"], &ResolveOptions::new()).unwrap(),
            "rounded p-2"
        );
    }

    #[test]
    fn dedup_merger_keeps_conflicting_utilities() {
        let theme = Theme::from_yaml("card: rounded p-4\ncompact: p-2")
            .unwrap()
            .with_merger(crate::DedupMerger);
        assert_eq!(
            theme.merge_css(["card", "compact"], &ResolveOptions::new()).unwrap(),
            "rounded p-4 p-2"
        );
    }

    #[test]
    fn subject_and_override() {
        let theme = theme();
        let subject = json!({ "boolean": false });
        let options = ResolveOptions::new().subject(&subject).attribute("boolean", true);
        assert_eq!(
            theme.css("complex", &options).unwrap(),
            "complex-base boolean boolean-true"
        );
    }

    #[test]
    fn theme_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Theme>();
    }

    #[test]
    fn refresh_without_source() {
        let mut theme = Theme::default();
        assert!(matches!(theme.refresh(), Err(ThemeError::NoSource)));
    }

    #[test]
    fn from_file_and_refresh() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let theme_path = temp_dir.path().join("dynamic.yml");
        fs::write(&theme_path, "header: text-red-500\n").unwrap();

        let mut theme = Theme::from_file(&theme_path)
            .unwrap()
            .with_missing_classname("unset");
        assert_eq!(theme.name(), Some("dynamic"));
        assert_eq!(theme.source_path(), Some(theme_path.as_path()));
        assert_eq!(theme.css("footer", &ResolveOptions::new()).unwrap(), "unset");

        fs::write(&theme_path, "header: text-blue-500\nfooter: text-sm\n").unwrap();
        theme.refresh().unwrap();

        assert_eq!(
            theme.css("header", &ResolveOptions::new()).unwrap(),
            "text-blue-500"
        );
        assert_eq!(theme.css("footer", &ResolveOptions::new()).unwrap(), "text-sm");
    }
}
