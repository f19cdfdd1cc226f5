//! Logging setup for the sitecfg CLI.
//!
//! Events go to stderr so stdout carries only the resolved configuration.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for sitecfg crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for sitecfg crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "sitecfg_cli=debug,sitecfg_config=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "sitecfg_cli=info,sitecfg_config=info";

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// stderr terminal decides.
pub fn should_use_colors() -> bool {
    colors_enabled(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        || console::Term::stderr().features().colors_supported(),
    )
}

fn colors_enabled(no_color: bool, force_color: bool, supported: impl FnOnce() -> bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    supported()
}
