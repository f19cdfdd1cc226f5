//! Settings loading shared by commands.

use std::path::PathBuf;

use sitecfg_config::{ConfigDiscovery, ResolverSettings};

use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};

/// Load settings: explicit file, else discovery, else defaults; then apply `--slug`.
pub fn load_settings(args: &SettingsArgs) -> Result<ResolverSettings> {
    let root = match &args.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let discovery = ConfigDiscovery::new(&root);

    let mut settings = match &args.config {
        Some(path) => {
            let path = resolve_path(&root, path);
            if !path.exists() {
                return Err(CliError::FileNotFound(path));
            }
            discovery.load_from(&path)?
        }
        None => discovery.load_or_default()?,
    };

    if let Some(slug) = &args.slug {
        settings.project_slug = slug.clone();
    }

    tracing::debug!(
        root = %root.display(),
        slug = %settings.project_slug,
        plugins = settings.plugins.len(),
        "loaded resolver settings"
    );

    Ok(settings)
}

fn resolve_path(root: &std::path::Path, path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
