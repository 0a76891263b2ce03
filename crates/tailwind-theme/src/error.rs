//! Error types for theme loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a theme or resolving class names.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A strict lookup hit a path that is not in the theme.
    #[error("theme key missing: \"{path}\"")]
    PathNotFound {
        /// The dotted reconstruction of the normalized path.
        path: String,
    },

    /// An object theme was reached with neither a subject nor attributes.
    #[error("must pass a subject or attributes when applying an object theme")]
    MissingContext,

    /// The theme source could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme source is not valid YAML/JSON.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// Template expansion of the theme source failed.
    #[error("failed to expand theme template{}: {message}", location(.path))]
    Template {
        path: Option<PathBuf>,
        message: String,
    },

    /// A value could not be serialized into a subject.
    #[error("failed to capture subject: {message}")]
    Subject { message: String },

    /// `refresh` was called on a theme that was not loaded from a file.
    #[error("cannot refresh: theme has no source file")]
    NoSource,
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
