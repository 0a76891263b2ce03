//! Reading theme trees from text and files.
//!
//! Themes are plain YAML (the default) or JSON. A file whose last extension is
//! `.j2` or `.jinja` is first rendered as a MiniJinja template, so shared
//! values can be computed before parsing:
//!
//! ```yaml
//! {# theme.yml.j2 #}
//! {% set accent = env("THEME_ACCENT", "blue") %}
//! button:
//!   base: rounded bg-{{ accent }}-600 hover:bg-{{ accent }}-500
//! ```
//!
//! Templates see one helper, `env(name, default)`, which reads an
//! environment variable.

use std::path::Path;

use minijinja::{context, Environment};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::node::Node;

/// Extensions that mark a theme file as a template.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["j2", "jinja"];

/// Recognized theme formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension; anything unrecognized is YAML.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Parses theme text in the given format.
pub fn parse(content: &str, format: Format, path: Option<&Path>) -> Result<Node> {
    let parsed = match format {
        Format::Yaml => serde_yaml::from_str::<Node>(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str::<Node>(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| ThemeError::Parse {
        path: path.map(Path::to_path_buf),
        message,
    })
}

/// Expands a theme template.
pub fn render_template(content: &str, path: Option<&Path>) -> Result<String> {
    let mut env = Environment::new();
    env.add_function("env", |name: String, default: Option<String>| -> String {
        std::env::var(&name).ok().or(default).unwrap_or_default()
    });
    env.render_str(content, context! {})
        .map_err(|e| ThemeError::Template {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })
}

/// Loaded theme file contents.
#[derive(Debug, Clone)]
pub struct LoadedTheme {
    /// File name with every theme extension removed (`app.yml.j2` → `app`).
    pub name: Option<String>,
    pub tree: Node,
}

/// Reads, optionally expands, and parses a theme file.
pub fn load_file(path: &Path) -> Result<LoadedTheme> {
    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
    let (inner_name, templated) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && is_template_extension(ext) => (stem, true),
        _ => (file_name, false),
    };

    let content = if templated {
        render_template(&content, Some(path))?
    } else {
        content
    };

    let format = Format::from_extension(inner_name.rsplit_once('.').map(|(_, ext)| ext));
    let name = Some(strip_extension(inner_name)).filter(|name| !name.is_empty());
    debug!(path = %path.display(), ?format, templated, "loading theme file");

    Ok(LoadedTheme {
        name,
        tree: parse(&content, format, Some(path))?,
    })
}

fn is_template_extension(ext: &str) -> bool {
    TEMPLATE_EXTENSIONS
        .iter()
        .any(|template| ext.eq_ignore_ascii_case(template))
}

fn strip_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
