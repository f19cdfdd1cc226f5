//! Environment → build configuration resolution.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::environment::{Environment, Mode};
use crate::error::Result;
use crate::plugin::{select_plugins, PluginDescriptor};
use crate::settings::{BasePathTemplate, ResolverSettings};
use crate::validation::{
    validate_base_path, validate_output_dir, validate_project_slug, validate_settings,
};

/// Fully resolved build configuration handed to the bundler.
///
/// Only [`ConfigResolver`] constructs this type, after every path invariant
/// has been checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    mode: Mode,

    #[serde(rename = "base")]
    base_path: String,

    #[serde(rename = "outDir")]
    output_dir: PathBuf,

    plugins: Vec<PluginDescriptor>,
}

impl ResolvedConfig {
    /// Normalized mode the configuration was resolved for
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Plugins in pipeline order
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Root-relative URL prefix; always starts and ends with `/`
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Output directory relative to the project root
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Resolves [`ResolverSettings`] against an [`Environment`].
///
/// Resolution is pure: the same environment always yields an equal
/// configuration, and a resolver can be shared across threads.
///
/// # Example
///
/// ```
/// use sitecfg_config::{ConfigResolver, Environment, ResolverSettings};
/// use std::path::Path;
///
/// let resolver = ConfigResolver::new(ResolverSettings::new("DAR-Actividad03"));
///
/// let prod = resolver.resolve(&Environment::with_mode("production")).unwrap();
/// assert_eq!(prod.base_path(), "/DAR-Actividad03/");
/// assert_eq!(prod.output_dir(), Path::new("docs"));
///
/// let dev = resolver.resolve(&Environment::default()).unwrap();
/// assert_eq!(dev.base_path(), "/");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    settings: ResolverSettings,
}

impl ConfigResolver {
    /// Create a resolver; settings are checked per resolution
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Create a resolver after validating every mode of `settings`.
    pub fn validated(settings: ResolverSettings) -> Result<Self> {
        validate_settings(&settings)?;
        Ok(Self::new(settings))
    }

    /// Settings this resolver was built from
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve the configuration for `env`.
    ///
    /// Fails with `InvalidBasePath` or `InvalidOutputPath` before any
    /// configuration is built if a computed value breaks a path invariant.
    pub fn resolve(&self, env: &Environment) -> Result<ResolvedConfig> {
        let mode = env.mode();
        let settings = &self.settings;

        let template = settings.base_path.get(mode);
        if *template == BasePathTemplate::Project {
            validate_project_slug(&settings.project_slug)?;
        }
        let base_path = template.render(&settings.project_slug);
        validate_base_path(&base_path)?;

        let output_dir = settings.output_dir.get(mode);
        validate_output_dir(output_dir)?;

        let plugins = select_plugins(&settings.plugins, mode);

        tracing::debug!(
            %mode,
            raw_mode = ?env.raw_mode(),
            base = %base_path,
            out_dir = %output_dir.display(),
            plugins = plugins.len(),
            "resolved build configuration"
        );

        Ok(ResolvedConfig {
            mode,
            base_path,
            output_dir: output_dir.clone(),
            plugins,
        })
    }
}

/// Resolve once without keeping a resolver around.
pub fn resolve(env: &Environment, settings: &ResolverSettings) -> Result<ResolvedConfig> {
    ConfigResolver::new(settings.clone()).resolve(env)
}
