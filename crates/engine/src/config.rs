use crate::error::{EngineError, Result};
use crate::options::LineEnding;
use derive_builder::Builder;
use encoding_rs::Encoding;
use hashbrown::HashSet;
use std::path::PathBuf;

pub const DEFAULT_SEPARATOR: char = '\t';
pub const DEFAULT_EXCLUDED_LINES: [usize; 4] = [1, 2, 3, 5];
pub const DEFAULT_HEADER_LINE: usize = 4;
pub const DEFAULT_EXTENSION: &str = "txt";

/// Which 1-based line positions are metadata rather than data.
///
/// The header line is always skipped from data output, whether or not it is
/// also listed in `excluded_lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumberPolicy {
    excluded_lines: HashSet<usize>,
    header_line: usize,
}

impl LineNumberPolicy {
    pub fn new<I>(excluded_lines: I, header_line: usize) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            excluded_lines: excluded_lines.into_iter().collect(),
            header_line,
        }
    }

    #[must_use]
    pub const fn header_line(&self) -> usize {
        self.header_line
    }

    #[must_use]
    pub const fn excluded_lines(&self) -> &HashSet<usize> {
        &self.excluded_lines
    }

    /// True when the line at `line_number` must not produce a data row.
    #[must_use]
    pub fn is_skipped(&self, line_number: usize) -> bool {
        line_number == self.header_line || self.excluded_lines.contains(&line_number)
    }
}

impl Default for LineNumberPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_LINES, DEFAULT_HEADER_LINE)
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub target_dir: PathBuf,
    #[builder(default = "DEFAULT_SEPARATOR")]
    pub separator: char,
    #[builder(default)]
    pub policy: LineNumberPolicy,
    #[builder(default = "encoding_rs::UTF_8")]
    pub encoding: &'static Encoding,
    #[builder(default)]
    pub line_ending: LineEnding,
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::new(),
            separator: DEFAULT_SEPARATOR,
            policy: LineNumberPolicy::default(),
            encoding: encoding_rs::UTF_8,
            line_ending: LineEnding::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Reject settings that would make every conversion meaningless or unsafe.
    ///
    /// # Errors
    /// Returns `EngineError::Config` describing the first offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.target_dir.as_os_str().is_empty() {
            return Err(EngineError::Config("target directory path is empty".into()));
        }
        if self.policy.header_line() == 0 {
            return Err(EngineError::Config("header line is 1-based; 0 is not a line".into()));
        }
        if self.policy.excluded_lines().contains(&0) {
            return Err(EngineError::Config("excluded lines are 1-based; 0 is not a line".into()));
        }
        if matches!(self.separator, '\n' | '\r') {
            return Err(EngineError::Config("separator cannot be a line terminator".into()));
        }
        if !self.encoding.is_ascii_compatible() {
            return Err(EngineError::Config(format!(
                "encoding {} is not ASCII-compatible",
                self.encoding.name()
            )));
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(EngineError::Config("input extension is empty".into()));
        }
        // Output files are written next to the inputs as `<stem>.csv`.
        if ext.eq_ignore_ascii_case("csv") {
            return Err(EngineError::Config(
                "input extension 'csv' would overwrite the inputs".into(),
            ));
        }
        Ok(())
    }

    /// Extension without a leading dot.
    #[must_use]
    pub fn input_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
