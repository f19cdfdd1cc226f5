//! sitecfg CLI - resolve build configuration for static site pipelines.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `resolve` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
