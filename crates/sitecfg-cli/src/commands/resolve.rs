//! `sitecfg resolve`

use sitecfg_config::{ConfigResolver, Environment, ResolvedConfig};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::utils::load_settings;
use crate::error::Result;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = resolve(&args)?;
    println!("{}", render(&config, args.format)?);
    Ok(())
}

/// Resolve without printing. `--mode` replaces the process snapshot.
pub fn resolve(args: &ResolveArgs) -> Result<ResolvedConfig> {
    let settings = load_settings(&args.settings)?;
    let env = match &args.mode {
        Some(mode) => Environment::with_mode(mode.clone()),
        None => Environment::from_process(),
    };

    let config = ConfigResolver::validated(settings)?.resolve(&env)?;
    tracing::debug!(mode = %config.mode(), base = config.base_path(), "resolved");
    Ok(config)
}

pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    })
}
