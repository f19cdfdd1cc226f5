//! Error handling for the sitecfg CLI.
//!
//! [`CliError`] wraps resolver errors and output failures; `main` converts it
//! into a miette report via [`cli_error_to_miette`].

use std::path::PathBuf;
use thiserror::Error;

pub use sitecfg_config::ConfigError;

mod miette;

pub use self::miette::cli_error_to_miette;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings loading, validation or resolution failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Explicit settings file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
