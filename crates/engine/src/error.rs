use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV record to '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Target directory not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("Target is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Line {line} of '{path}' is not valid {encoding}")]
    Decode {
        path: PathBuf,
        line: usize,
        encoding: &'static str,
    },

    #[error("Header line {line} not found (file has only {found} lines)")]
    HeaderMissing { line: usize, found: usize },

    #[error("Header line {line} has no data columns")]
    HeaderWithoutColumns { line: usize },

    #[error("Output '{output}' is already produced by '{claimed_by}'")]
    OutputCollision { output: PathBuf, claimed_by: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Errors that mean "this file is not convertible" rather than "the
    /// conversion broke". Such files are reported as skipped.
    #[must_use]
    pub const fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::HeaderMissing { .. } | Self::HeaderWithoutColumns { .. } | Self::OutputCollision { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
