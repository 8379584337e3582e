//! Settings: defaults, optional `config.json`, `CHATMARK_*` env vars, CLI flags.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::core::math::{MathRenderer, RawMath, UnicodeMath};
use crate::core::paths;

/// Default wrap width for plain output.
pub const DEFAULT_WIDTH: usize = 100;

/// How rendered messages are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal styling (bold, italic, colors)
    Styled,
    /// Unstyled text wrapped to the configured width
    Plain,
    /// Render nodes as JSON
    Json,
}

/// Which math renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MathStyle {
    /// Typeset LaTeX to Unicode symbols
    Unicode,
    /// Show expressions as written
    Raw,
}

impl MathStyle {
    pub fn renderer(self) -> Box<dyn MathRenderer> {
        match self {
            MathStyle::Unicode => Box::new(UnicodeMath),
            MathStyle::Raw => Box::new(RawMath),
        }
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Default,
    File,
    Env,
    Flag,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Default => "default",
            Source::File => "config file",
            Source::Env => "environment",
            Source::Flag => "command line",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }

    /// Replace the value when `value` is set.
    fn layer(&mut self, value: Option<T>, source: Source) {
        if let Some(v) = value {
            *self = Self::new(v, source);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub format: Sourced<OutputFormat>,
    pub math: Sourced<MathStyle>,
    pub width: Sourced<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Sourced::new(OutputFormat::Styled, Source::Default),
            math: Sourced::new(MathStyle::Unicode, Source::Default),
            width: Sourced::new(DEFAULT_WIDTH, Source::Default),
        }
    }
}

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// JSON structure on disk. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    format: Option<OutputFormat>,
    math: Option<MathStyle>,
    width: Option<usize>,
}

impl Config {
    /// Apply command-line flags on top of the loaded settings.
    pub fn with_flags(
        mut self,
        format: Option<OutputFormat>,
        math: Option<MathStyle>,
        width: Option<usize>,
    ) -> Self {
        self.format.layer(format, Source::Flag);
        self.math.layer(math, Source::Flag);
        self.width.layer(width, Source::Flag);
        self
    }
}

/// Load settings from the config file (if present) and the environment.
pub fn load() -> Result<Config, ConfigError> {
    let file = match paths::config_file() {
        Some(path) if path.exists() => Some(read_file(&path)?),
        _ => None,
    };
    resolve(file, |key| env::var(key).ok())
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path)?;
    log::debug!("loaded config file {}", path.display());
    Ok(serde_json::from_str(&content)?)
}

/// Layer file values, then env values, over the defaults.
fn resolve<F>(file: Option<ConfigFile>, env_var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    if let Some(file) = file {
        config.format.layer(file.format, Source::File);
        config.math.layer(file.math, Source::File);
        config.width.layer(file.width, Source::File);
    }

    let lookup = |key: &str| env_var(key).filter(|v| !v.trim().is_empty());
    if let Some(v) = lookup("CHATMARK_FORMAT") {
        config
            .format
            .layer(Some(parse_enum("CHATMARK_FORMAT", &v)?), Source::Env);
    }
    if let Some(v) = lookup("CHATMARK_MATH") {
        config
            .math
            .layer(Some(parse_enum("CHATMARK_MATH", &v)?), Source::Env);
    }
    if let Some(v) = lookup("CHATMARK_WIDTH") {
        let width = v.trim().parse::<usize>().map_err(|_| {
            ConfigError::Invalid(format!(
                "CHATMARK_WIDTH must be a non-negative integer, got '{}'",
                v
            ))
        })?;
        config.width.layer(Some(width), Source::Env);
    }
    Ok(config)
}

fn parse_enum<T: ValueEnum>(key: &str, value: &str) -> Result<T, ConfigError> {
    T::from_str(value.trim(), true).map_err(|e| ConfigError::Invalid(format!("{}: {}", key, e)))
}
