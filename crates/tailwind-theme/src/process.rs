//! Expansion of theme nodes into class-name fragments.
//!
//! Scalars expand to themselves and sequences to the concatenation of their
//! children. A mapping reached during expansion is an *object theme*: its
//! `base` always applies, and every other key names an attribute of the
//! subject whose value picks what else applies.
//!
//! ```yaml
//! complex:
//!   base: complex-base          # always
//!   boolean:                    # keyed by subject.boolean
//!     base: boolean             # whenever the attribute is known
//!     true: boolean-true
//!     false: boolean-false
//!   rounded: rounded-lg         # only when subject.rounded is truthy
//!   size:                       # applied to each entry
//!     - { sm: text-sm, lg: text-lg }
//!     - { sm: p-1, lg: p-4 }
//! ```
//!
//! An attribute neither the overrides nor the subject know about is skipped
//! outright, without trying its `nil` or `false` branch.

use serde_json::Value;
use tracing::trace;

use crate::error::{Result, ThemeError};
use crate::node::{Mapping, Node};
use crate::options::ResolveOptions;
use crate::subject::{is_truthy, variant_key};
use crate::BASE_KEY;

/// Appends the fragments of `node` to `out`, in theme order.
pub(crate) fn expand<'t>(
    node: &'t Node,
    options: &ResolveOptions<'_>,
    out: &mut Vec<&'t str>,
) -> Result<()> {
    match node {
        Node::Scalar(classes) => out.push(classes),
        Node::Sequence(items) => {
            for item in items {
                expand(item, options, out)?;
            }
        }
        Node::Mapping(theme) => expand_object_theme(theme, options, out)?,
    }
    Ok(())
}

fn expand_object_theme<'t>(
    theme: &'t Mapping,
    options: &ResolveOptions<'_>,
    out: &mut Vec<&'t str>,
) -> Result<()> {
    if !options.has_context() {
        return Err(ThemeError::MissingContext);
    }

    if let Some(base) = theme.get(BASE_KEY) {
        expand(base, options, out)?;
    }

    for (attribute, sub_theme) in theme {
        if attribute == BASE_KEY {
            continue;
        }
        match options.answer(attribute) {
            Some(value) => apply_attribute(attribute, &value, sub_theme, options, out)?,
            None => trace!(attribute = %attribute, "attribute unknown to subject, skipped"),
        }
    }
    Ok(())
}

fn apply_attribute<'t>(
    attribute: &str,
    value: &Value,
    sub_theme: &'t Node,
    options: &ResolveOptions<'_>,
    out: &mut Vec<&'t str>,
) -> Result<()> {
    match sub_theme {
        Node::Sequence(items) => {
            for item in items {
                apply_attribute(attribute, value, item, options, out)?;
            }
        }
        Node::Mapping(variants) => {
            let key = variant_key(value);
            if let Some(base) = variants.get(BASE_KEY) {
                expand(base, options, out)?;
            }
            match variants.get(&*key) {
                Some(branch) => {
                    trace!(attribute = %attribute, variant = %key, "variant selected");
                    expand(branch, options, out)?;
                }
                None => trace!(attribute = %attribute, variant = %key, "no branch for variant"),
            }
        }
        Node::Scalar(classes) => {
            if is_truthy(value) {
                out.push(classes);
            }
        }
    }
    Ok(())
}

/// Joins fragments with single spaces, dropping blank ones.
pub(crate) fn join<'s, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'s str>,
{
    let mut joined = String::new();
    for fragment in fragments {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(fragment);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(yaml: &str) -> Node {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn expand_to_string(node: &Node, options: &ResolveOptions<'_>) -> Result<String> {
        let mut out = Vec::new();
        expand(node, options, &mut out)?;
        Ok(join(out))
    }

    #[test]
    fn scalar_and_sequence() {
        let tree = node("[a, [b, c], d e]");
        let result = expand_to_string(&tree, &ResolveOptions::new()).unwrap();
        assert_eq!(result, "a b c d e");
    }

    #[test]
    fn mapping_without_context_fails() {
        let tree = node("base: only-base");
        let err = expand_to_string(&tree, &ResolveOptions::new()).unwrap_err();
        assert!(matches!(err, ThemeError::MissingContext));
    }

    #[test]
    fn nested_mapping_in_sequence_needs_context() {
        let tree = node("[plain, { base: b }]");
        let err = expand_to_string(&tree, &ResolveOptions::new()).unwrap_err();
        assert!(matches!(err, ThemeError::MissingContext));
    }

    #[test]
    fn base_comes_first_regardless_of_position() {
        let tree = node(
            r#"
            flag: flag-on
            base: the-base
            "#,
        );
        let options = ResolveOptions::new().attribute("flag", true);
        assert_eq!(expand_to_string(&tree, &options).unwrap(), "the-base flag-on");
    }

    #[test]
    fn scalar_sub_theme_applies_when_truthy() {
        let tree = node("{ base: b, flag: flag-on }");

        let on = ResolveOptions::new().attribute("flag", "yes");
        assert_eq!(expand_to_string(&tree, &on).unwrap(), "b flag-on");

        let off = ResolveOptions::new().attribute("flag", false);
        assert_eq!(expand_to_string(&tree, &off).unwrap(), "b");

        let null = ResolveOptions::new().attribute("flag", Value::Null);
        assert_eq!(expand_to_string(&tree, &null).unwrap(), "b");
    }

    #[test]
    fn unknown_attribute_is_skipped_entirely() {
        let tree = node(
            r#"
            base: b
            state:
              base: state-base
              nil: state-nil
              false: state-false
            "#,
        );
        let subject = json!({ "other": 1 });
        let options = ResolveOptions::new().subject(&subject);
        assert_eq!(expand_to_string(&tree, &options).unwrap(), "b");
    }

    #[test]
    fn null_selects_nil_branch_and_false_selects_false() {
        let tree = node(
            r#"
            state:
              nil: state-nil
              false: state-false
            "#,
        );

        let null = ResolveOptions::new().attribute("state", Value::Null);
        assert_eq!(expand_to_string(&tree, &null).unwrap(), "state-nil");

        let off = ResolveOptions::new().attribute("state", false);
        assert_eq!(expand_to_string(&tree, &off).unwrap(), "state-false");
    }

    #[test]
    fn variant_base_applies_without_matching_branch() {
        let tree = node(
            r#"
            variant:
              base: variant-base
              primary: variant-primary
            "#,
        );
        let options = ResolveOptions::new().attribute("variant", "missing");
        assert_eq!(expand_to_string(&tree, &options).unwrap(), "variant-base");
    }

    #[test]
    fn selected_branch_is_expanded_recursively() {
        let tree = node(
            r#"
            size:
              lg:
                - text-lg
                - base: lg-base
                  rounded: rounded-xl
            "#,
        );
        let options = ResolveOptions::new()
            .attribute("size", "lg")
            .attribute("rounded", true);
        assert_eq!(
            expand_to_string(&tree, &options).unwrap(),
            "text-lg lg-base rounded-xl"
        );
    }

    #[test]
    fn sequence_sub_theme_applies_same_attribute_to_each() {
        let tree = node(
            r#"
            size:
              - { sm: text-sm, lg: text-lg }
              - { base: pad, sm: p-1, lg: p-4 }
              - sized
            "#,
        );
        let options = ResolveOptions::new().attribute("size", "sm");
        assert_eq!(
            expand_to_string(&tree, &options).unwrap(),
            "text-sm pad p-1 sized"
        );
    }

    #[test]
    fn numeric_values_select_by_string_form() {
        let tree = node("{ level: { 1: h1, 2: h2 } }");
        let options = ResolveOptions::new().attribute("level", 2);
        assert_eq!(expand_to_string(&tree, &options).unwrap(), "h2");
    }

    #[test]
    fn join_skips_blank_fragments() {
        assert_eq!(join(["a", "", "  ", " b ", "c"]), "a b c");
        assert_eq!(join(Vec::<&str>::new()), "");
    }
}
