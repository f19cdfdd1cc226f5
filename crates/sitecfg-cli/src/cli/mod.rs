//! Command-line interface definition.
//!
//! - `sitecfg resolve` - print the resolved configuration for the current mode
//! - `sitecfg check` - validate settings against every mode

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitecfg",
    version,
    about = "Resolve environment-aware build configuration",
    long_about = "sitecfg maps the active build mode (NODE_ENV) to a validated build\n\
                  configuration: plugin list, base URL path and output directory."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the build configuration
    Resolve(ResolveArgs),

    /// Validate settings for every mode
    Check(CheckArgs),
}

/// Where settings come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (defaults to sitecfg.toml or the package.json "sitecfg" field)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project slug used in production base paths (overrides settings)
    #[arg(long, value_name = "SLUG")]
    pub slug: Option<String>,

    /// Project root to search for settings
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Build mode; defaults to the NODE_ENV environment variable
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_mode() {
        let cli = Cli::try_parse_from([
            "sitecfg", "resolve", "--mode", "production", "--slug", "site", "-f", "toml",
        ])
        .unwrap();

        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.mode.as_deref(), Some("production"));
                assert_eq!(args.settings.slug.as_deref(), Some("site"));
                assert_eq!(args.format, OutputFormat::Toml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["sitecfg", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn format_defaults_to_json() {
        let cli = Cli::try_parse_from(["sitecfg", "resolve"]).unwrap();
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.mode.is_none());
    }
}
