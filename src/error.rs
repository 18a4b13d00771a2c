//! Error kinds surfaced by a session step.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error reading file {}: {reason}", .path.display())]
    FileRead { path: PathBuf, reason: String },

    #[error("Error writing file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error fetching {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Error loading git diff: {0}")]
    DiffCommand(String),

    #[error("Error loading response: {0}")]
    ModelRequest(String),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn file_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileRead { path: path.into(), reason: reason.to_string() }
    }

    /// Whether the failing step already printed its own message to the user.
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::FileWrite { .. } | Self::ModelRequest(_))
    }
}

impl From<git2::Error> for AppError {
    fn from(err: git2::Error) -> Self {
        Self::DiffCommand(err.message().to_string())
    }
}
