//! Error types for the ts-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Computation rejected: {0}")]
    Engine(#[from] ts_engine::EngineError),

    #[error("Failed to read settings file: {path}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported settings format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ts-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ts_engine::ParseVariantError> for AppError {
    fn from(err: ts_engine::ParseVariantError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
