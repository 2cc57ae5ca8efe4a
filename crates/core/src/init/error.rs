//! Error types for project initialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for initialization operations.
pub type InitResult<T> = Result<T, InitError>;

/// Errors that can occur while writing default configuration.
#[derive(Debug, Error)]
pub enum InitError {
    /// `config/` already exists and `force` was not set.
    #[error("config directory already exists at {0:?}. Use --force to overwrite.")]
    ConfigExists(PathBuf),

    /// No embedded template is stored under this config path.
    #[error("No template embedded for {0}")]
    TemplateNotFound(String),

    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
