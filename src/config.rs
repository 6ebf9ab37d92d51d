// src/config.rs
//! Resolution of the engine configuration.
//!
//! Precedence: command-line flag, then the `--config` settings file, then the
//! engine defaults (tab separator, lines 1,2,3,5 excluded, header on line 4,
//! UTF-8, LF, `.txt`).

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::parsers;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
pub use tabcsv_engine::config::{Config, ConfigBuilder, LineNumberPolicy};
use tabcsv_engine::config::{DEFAULT_EXCLUDED_LINES, DEFAULT_HEADER_LINE};
use tabcsv_engine::options::LineEnding;
use tabcsv_engine::source::encoding_for_label;

/// Contents of a `--config` file. Every key is optional.
///
/// ```yaml
/// target_dir: /data/exports
/// separator: "\t"
/// excluded_lines: [1, 2, 3, 5]
/// header_line: 4
/// encoding: shift_jis
/// line_ending: crlf
/// extension: txt
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub target_dir: Option<PathBuf>,
    pub separator: Option<String>,
    pub excluded_lines: Option<Vec<usize>>,
    pub header_line: Option<usize>,
    pub encoding: Option<String>,
    pub line_ending: Option<LineEnding>,
    pub extension: Option<String>,
}

impl Settings {
    /// Load settings from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, has another extension, or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&text)?),
            Some("json") => Ok(serde_json::from_str(&text)?),
            _ => Err(AppError::SettingsFormat(path.to_path_buf())),
        }
    }
}

/// Merge CLI arguments over the optional settings file into an engine `Config`.
///
/// # Errors
/// Fails on unreadable settings, a missing target directory, an unknown
/// encoding label or an invalid separator in the settings file.
pub fn resolve(args: &Args) -> Result<Config> {
    let settings = match &args.behavior.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    merge(args, settings)
}

fn merge(args: &Args, settings: Settings) -> Result<Config> {
    let target_dir = args
        .target_dir
        .clone()
        .or(settings.target_dir)
        .ok_or(AppError::MissingTarget)?;

    let separator = match (args.input.separator, settings.separator) {
        (Some(c), _) => Some(c),
        (None, Some(s)) => Some(parsers::parse_separator(&s).map_err(|message| {
            AppError::InvalidSetting {
                field: "separator",
                message,
            }
        })?),
        (None, None) => None,
    };

    let excluded = args
        .input
        .exclude_lines
        .clone()
        .or(settings.excluded_lines)
        .unwrap_or_else(|| DEFAULT_EXCLUDED_LINES.to_vec());
    let header_line = args
        .input
        .header_line
        .or(settings.header_line)
        .unwrap_or(DEFAULT_HEADER_LINE);

    let mut builder = ConfigBuilder::default();
    builder
        .target_dir(target_dir)
        .policy(LineNumberPolicy::new(excluded, header_line));

    if let Some(separator) = separator {
        builder.separator(separator);
    }
    if let Some(label) = args.input.encoding.as_deref().or(settings.encoding.as_deref()) {
        builder.encoding(encoding_for_label(label)?);
    }
    if let Some(line_ending) = args.output.line_ending.map(LineEnding::from).or(settings.line_ending) {
        builder.line_ending(line_ending);
    }
    if let Some(extension) = args.input.extension.clone().or(settings.extension) {
        builder.extension(extension);
    }

    builder.build().map_err(|e| AppError::Config(e.to_string()))
}
