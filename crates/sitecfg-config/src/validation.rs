//! Path invariants and settings validation.
//!
//! The path checks run on every resolution; [`SchemaValidator`] checks a whole
//! [`ResolverSettings`] up front so bad templates surface at load time.

use std::path::{Component, Path};

use crate::error::{ConfigError, Result};
use crate::settings::ResolverSettings;

/// Trait for pluggable settings validation strategies
pub trait ConfigValidator {
    fn validate(&self, settings: &ResolverSettings) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sitecfg_config::{ConfigValidator, ResolverSettings, SchemaValidator};
///
/// let settings = ResolverSettings::new("my-site");
/// SchemaValidator.validate(&settings).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, settings: &ResolverSettings) -> Result<()> {
        if settings.uses_project_slug() {
            validate_project_slug(&settings.project_slug)?;
        }

        for (_, template) in settings.base_path.iter() {
            validate_base_path(&template.render(&settings.project_slug))?;
        }

        for (_, dir) in settings.output_dir.iter() {
            validate_output_dir(dir)?;
        }

        for rule in &settings.plugins {
            if rule.plugin.name.trim().is_empty() {
                return Err(ConfigError::InvalidPlugin {
                    reason: "plugin name cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_settings(settings: &ResolverSettings) -> Result<()> {
    SchemaValidator.validate(settings)
}

/// A base path must be root-relative and end with a separator.
///
/// # Example
///
/// ```
/// use sitecfg_config::validate_base_path;
///
/// assert!(validate_base_path("/").is_ok());
/// assert!(validate_base_path("/site/").is_ok());
/// assert!(validate_base_path("site/").is_err());
/// assert!(validate_base_path("/site").is_err());
/// ```
pub fn validate_base_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidBasePath {
            path: path.to_string(),
            reason: "must start with '/'".to_string(),
        });
    }

    if !path.ends_with('/') {
        return Err(ConfigError::InvalidBasePath {
            path: path.to_string(),
            reason: "must end with '/'".to_string(),
        });
    }

    Ok(())
}

/// An output directory must be a non-empty relative path inside the project root.
///
/// # Example
///
/// ```
/// use sitecfg_config::validate_output_dir;
/// use std::path::Path;
///
/// assert!(validate_output_dir(Path::new("docs")).is_ok());
/// assert!(validate_output_dir(Path::new("../docs")).is_err());
/// assert!(validate_output_dir(Path::new("")).is_err());
/// ```
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "must not be empty".to_string(),
        });
    }

    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(ConfigError::InvalidOutputPath {
                    path: path.to_path_buf(),
                    reason: "must not contain '..' segments".to_string(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ConfigError::InvalidOutputPath {
                    path: path.to_path_buf(),
                    reason: "must be relative to the project root".to_string(),
                });
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}

/// The slug becomes exactly one URL segment.
pub(crate) fn validate_project_slug(slug: &str) -> Result<()> {
    let reason = if slug.trim().is_empty() {
        Some("project slug is required for 'project' base paths")
    } else if slug.trim() != slug {
        Some("project slug must not have surrounding whitespace")
    } else if slug.contains('/') || slug.contains('\\') {
        Some("project slug must be a single path segment")
    } else if slug == "." || slug == ".." {
        Some("project slug must not be a relative segment")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigError::InvalidBasePath {
            path: format!("/{slug}/"),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
