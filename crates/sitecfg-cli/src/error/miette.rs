//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Pass an existing file to --config or omit it to search the project root",
            "Settings file not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        ConfigError::InvalidBasePath { .. } => miette::miette!(
            help = "Base paths must start and end with '/'; set project_slug or pass --slug",
            "{}",
            err
        ),
        ConfigError::InvalidOutputPath { .. } => miette::miette!(
            help = "Use a non-empty relative directory inside the project, such as \"docs\"",
            "{}",
            err
        ),
        ConfigError::NotFound => miette::miette!(
            help = "Create a sitecfg.toml or add a \"sitecfg\" field to package.json",
            "No settings file found"
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
