use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the vsclean CLI.
///
/// Per-folder deletion failures never surface here; they are reported as
/// [`crate::model::ReclaimEvent::Failed`] and the walk carries on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("'{}' is not an existing directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
