// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] tabcsv_engine::error::EngineError),

    #[error("Failed to read settings '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error in settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported settings format '{0}' (expected .yaml, .yml or .json)")]
    SettingsFormat(PathBuf),

    #[error("Invalid value for {field}: {message}")]
    InvalidSetting { field: &'static str, message: String },

    #[error("No target directory given (pass TARGET_DIR or set target_dir in --config)")]
    MissingTarget,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
