//! `tailwind-theme`: resolve theme paths from the command line.
//!
//! ```text
//! tailwind-theme theme.yml css button --attr primary=true --append mt-2
//! tailwind-theme theme.yml css card card.compact --subject-json '{"elevated": true}'
//! tailwind-theme theme.yml exists button.icon
//! tailwind-theme theme.yml get button
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tailwind_theme::{DedupMerger, MissingClassname, ResolveOptions, TailwindMerger, Theme, Verbatim};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Resolve Tailwind CSS class presets from a theme file
#[derive(Parser)]
#[command(name = "tailwind-theme")]
#[command(version)]
struct Cli {
    /// Theme file (.yml, .yaml, .json, optionally followed by .j2/.jinja)
    theme: PathBuf,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the merged classes for one or more paths
    Css(CssArgs),
    /// Exit successfully if the path exists
    Exists {
        path: String,
    },
    /// Print the raw theme node at a path as YAML
    Get {
        /// Path to print; the whole theme when omitted
        #[arg(default_value = "")]
        path: String,
    },
}

#[derive(Args)]
struct CssArgs {
    /// Dotted theme paths; several paths are merged together
    #[arg(required = true)]
    paths: Vec<String>,

    /// Attribute override, KEY=VALUE (VALUE is parsed as JSON when possible)
    #[arg(short, long = "attr", value_parser = parse_attribute)]
    attributes: Vec<(String, Value)>,

    /// JSON object used as the subject for object themes
    #[arg(long, value_name = "JSON")]
    subject_json: Option<String>,

    /// Classes placed before the resolved ones
    #[arg(long)]
    prepend: Option<String>,

    /// Classes placed after the resolved ones
    #[arg(long)]
    append: Option<String>,

    /// Fail instead of substituting a class name for missing paths
    #[arg(long)]
    strict: bool,

    /// Class name for missing paths: "default", "none" or a literal class
    #[arg(long, default_value = "default")]
    missing: String,

    /// How the resolved classes are merged
    #[arg(long, value_enum, default_value_t = MergerKind::Tailwind)]
    merger: MergerKind,

    /// Keep every class, only collapsing whitespace (same as --merger verbatim)
    #[arg(long, conflicts_with = "merger")]
    no_merge: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MergerKind {
    /// Resolve Tailwind utility conflicts, later classes win
    Tailwind,
    /// Drop exact duplicates only
    Dedup,
    /// Keep every class
    Verbatim,
}

fn parse_attribute(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty attribute name in '{}'", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn missing_policy(raw: &str) -> MissingClassname {
    match raw {
        "default" => MissingClassname::Default,
        "none" => MissingClassname::Disabled,
        classes => MissingClassname::from(classes),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn css(theme: Theme, args: CssArgs) -> Result<String> {
    let merger = if args.no_merge {
        MergerKind::Verbatim
    } else {
        args.merger
    };
    let theme = theme.with_missing_classname(missing_policy(&args.missing));
    let theme = match merger {
        MergerKind::Tailwind => theme.with_merger(TailwindMerger),
        MergerKind::Dedup => theme.with_merger(DedupMerger),
        MergerKind::Verbatim => theme.with_merger(Verbatim),
    };

    let subject: Option<Value> = args
        .subject_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .context("--subject-json must be valid JSON")?;

    let mut options = ResolveOptions::new().raise(args.strict);
    if let Some(subject) = subject.as_ref() {
        options = options.subject(subject);
    }
    if !args.attributes.is_empty() {
        options = options.attributes(args.attributes);
    }
    if let Some(prepend) = args.prepend {
        options = options.prepend(prepend);
    }
    if let Some(append) = args.append {
        options = options.append(append);
    }

    let classes = match args.paths.as_slice() {
        [path] => theme.css(path, &options),
        paths => theme.merge_css(paths, &options),
    };
    Ok(classes?)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let theme = Theme::from_file(&cli.theme)
        .with_context(|| format!("loading theme {}", cli.theme.display()))?;
    debug!(theme = ?theme.name(), "theme loaded");

    match cli.command {
        Command::Css(args) => {
            println!("{}", css(theme, args)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Exists { path } => Ok(if theme.contains(&path) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        Command::Get { path } => match theme.get(&path) {
            Some(node) => {
                print!("{}", serde_yaml::to_string(node)?);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("theme key missing: \"{}\"", path);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
