//! File-based settings discovery for CLI use
//!
//! Layers defaults, a discovered settings file and `SITECFG_*` environment
//! variables with figment. Library users can build [`ResolverSettings`]
//! directly or via [`ResolverSettings::from_value`].

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::settings::ResolverSettings;

/// Settings file name searched in the project root.
pub const CONFIG_FILE: &str = "sitecfg.toml";

/// `package.json` field holding inline settings.
pub const PACKAGE_JSON_FIELD: &str = "sitecfg";

/// Prefix for environment overrides (e.g. `SITECFG_PROJECT_SLUG`).
pub const ENV_PREFIX: &str = "SITECFG_";

/// Slug override, always taken as a string.
pub const SLUG_ENV: &str = "SITECFG_PROJECT_SLUG";

/// File-based settings discovery
///
/// # Example
///
/// ```no_run
/// use sitecfg_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let settings = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new settings discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a settings file in the root directory
    ///
    /// Searches in this order:
    /// 1. `sitecfg.toml`
    /// 2. `package.json` (`sitecfg` field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load settings from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no settings file is found.
    pub fn load(&self) -> Result<ResolverSettings> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load settings from the discovered file, falling back to defaults
    /// plus environment overrides when there is none.
    pub fn load_or_default(&self) -> Result<ResolverSettings> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no settings file, using defaults");
                extract(with_env(base_figment()))
            }
        }
    }

    /// Load settings from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<ResolverSettings> {
        tracing::debug!("Loading resolver settings from: {}", path.display());

        let figment = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            base_figment().merge(Json::string(&self.package_json_section(path)?))
        } else {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("settings file not found: {}", path.display()),
                )));
            }
            base_figment().merge(Toml::file(path))
        };

        extract(with_env(figment))
    }

    fn package_json_section(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(section) if !section.is_null() => Ok(section.to_string()),
            Some(_) => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'sitecfg' field cannot be null".to_string()),
            }),
            None => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'sitecfg' field to your package.json".to_string()),
            }),
        }
    }
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(ResolverSettings::default()))
}

/// Layer `SITECFG_*` overrides. The slug is merged verbatim so values such as
/// `2024` or `true` are not parsed as numbers or booleans.
fn with_env(figment: Figment) -> Figment {
    let figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["project_slug"]));
    match Env::var(SLUG_ENV) {
        Some(slug) => figment.merge(Serialized::default("project_slug", slug)),
        None => figment,
    }
}

fn extract(figment: Figment) -> Result<ResolverSettings> {
    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "settings".to_string(),
        hint: Some(e.to_string()),
    })
}

/// Discover and load settings from the current directory (convenience function)
pub fn discover() -> Result<ResolverSettings> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "project_slug = \"a\"\n").unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "sitecfg": { "project_slug": "b" } }"#,
        )
        .unwrap();

        let found = ConfigDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "site" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());

        fs::write(dir.path().join("package.json"), r#"{ "sitecfg": null }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn load_from_missing_explicit_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let result = discovery.load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
