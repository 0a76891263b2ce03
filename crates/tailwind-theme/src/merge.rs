//! Class-string merging.
//!
//! Resolution hands the joined class string to a [`ClassMerger`] exactly once
//! per call. A merger must be deterministic and idempotent:
//! `merge(merge(s)) == merge(s)`.
//!
//! With the `tailwind-merge` feature (on by default) themes use
//! [`TailwindMerger`], which resolves utility conflicts so a later `p-2`
//! replaces an earlier `p-4`. Without it the default is [`DedupMerger`], which
//! only drops exact duplicates.
//!
//! ```rust
//! use tailwind_theme::{ClassMerger, DedupMerger};
//!
//! assert_eq!(DedupMerger.merge("p-2 rounded p-2  shadow"), "rounded p-2 shadow");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

/// Resolves conflicts in a space-separated class string.
pub trait ClassMerger: Send + Sync {
    fn merge(&self, classes: &str) -> String;
}

impl<F> ClassMerger for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn merge(&self, classes: &str) -> String {
        self(classes)
    }
}

/// Drops repeated tokens, keeping each at its last position.
///
/// Later tokens win, so a token repeated at the end of the string moves there.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupMerger;

impl ClassMerger for DedupMerger {
    fn merge(&self, classes: &str) -> String {
        let mut seen = HashSet::new();
        let mut kept: Vec<&str> = classes
            .split_whitespace()
            .rev()
            .filter(|token| seen.insert(*token))
            .collect();
        kept.reverse();
        kept.join(" ")
    }
}

/// Resolves Tailwind utility conflicts; the last class of a group wins.
///
/// ```rust
/// use tailwind_theme::{ClassMerger, TailwindMerger};
///
/// assert_eq!(TailwindMerger.merge("rounded p-4 p-2"), "rounded p-2");
/// ```
#[cfg(feature = "tailwind-merge")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindMerger;

#[cfg(feature = "tailwind-merge")]
impl ClassMerger for TailwindMerger {
    fn merge(&self, classes: &str) -> String {
        tailwind_fuse::tw_merge!(classes)
    }
}

/// The merger a new theme starts with.
#[cfg(feature = "tailwind-merge")]
pub(crate) fn default_merger() -> Arc<dyn ClassMerger> {
    Arc::new(TailwindMerger)
}

#[cfg(not(feature = "tailwind-merge"))]
pub(crate) fn default_merger() -> Arc<dyn ClassMerger> {
    Arc::new(DedupMerger)
}

/// Keeps every token, only collapsing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl ClassMerger for Verbatim {
    fn merge(&self, classes: &str) -> String {
        classes.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
