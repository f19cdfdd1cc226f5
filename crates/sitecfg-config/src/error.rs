//! Error types for configuration resolution and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Resolution invariants
    #[error("invalid output directory '{}': {reason}", .path.display())]
    InvalidOutputPath { path: PathBuf, reason: String },

    #[error("invalid base path '{path}': {reason}")]
    InvalidBasePath { path: String, reason: String },

    #[error("invalid plugin: {reason}")]
    InvalidPlugin { reason: String },

    // Settings loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
