//! `sitecfg check`

use sitecfg_config::{ConfigResolver, Environment, Mode};

use crate::cli::CheckArgs;
use crate::commands::utils::load_settings;
use crate::error::Result;

pub fn execute(args: CheckArgs) -> Result<()> {
    for line in check(&args)? {
        println!("{line}");
    }
    Ok(())
}

/// Validate settings and resolve every mode, returning one summary line per mode.
pub fn check(args: &CheckArgs) -> Result<Vec<String>> {
    let resolver = ConfigResolver::validated(load_settings(&args.settings)?)?;

    [Mode::Production, Mode::Development]
        .into_iter()
        .map(|mode| -> Result<String> {
            let config = resolver.resolve(&Environment::with_mode(mode.as_str()))?;
            let plugins: Vec<&str> = config.plugins().iter().map(|p| p.name.as_str()).collect();
            tracing::debug!(%mode, "mode ok");
            Ok(format!(
                "{mode}: base={} outDir={} plugins=[{}]",
                config.base_path(),
                config.output_dir().display(),
                plugins.join(", ")
            ))
        })
        .collect()
}
