//! Resolver settings: the mode tables and plugin rules a build is resolved from.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::plugin::{PluginDescriptor, PluginRule};
use crate::table::ModeTable;

/// Default output directory, shared by every mode.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Default framework plugin.
pub const DEFAULT_FRAMEWORK_PLUGIN: &str = "vue";

/// How the base path for a mode is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasePathTemplate {
    /// `/`
    Root,
    /// `/<project-slug>/`
    Project,
    /// Used verbatim
    Custom(String),
}

impl BasePathTemplate {
    /// Render the base path for `project_slug`
    pub fn render(&self, project_slug: &str) -> String {
        match self {
            BasePathTemplate::Root => "/".to_string(),
            BasePathTemplate::Project => format!("/{project_slug}/"),
            BasePathTemplate::Custom(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Project identifier embedded in `Project` base paths
    #[serde(default)]
    pub project_slug: String,

    #[serde(default = "default_base_path", deserialize_with = "mode_table")]
    pub base_path: ModeTable<BasePathTemplate>,

    /// Output directory relative to the project root
    #[serde(default = "default_output_dir", deserialize_with = "mode_table")]
    pub output_dir: ModeTable<PathBuf>,

    /// Plugin rules in pipeline order
    #[serde(default = "default_plugins")]
    pub plugins: Vec<PluginRule>,
}

impl ResolverSettings {
    /// Settings for a project: `/<slug>/` in production, `/` otherwise,
    /// output to `docs`, framework plugin only.
    ///
    /// # Example
    ///
    /// ```
    /// use sitecfg_config::{BasePathTemplate, Mode, ResolverSettings};
    ///
    /// let settings = ResolverSettings::new("my-site");
    /// assert_eq!(settings.base_path.get(Mode::Production), &BasePathTemplate::Project);
    /// assert_eq!(settings.plugins.len(), 1);
    /// ```
    pub fn new(project_slug: impl Into<String>) -> Self {
        Self {
            project_slug: project_slug.into(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sitecfg_config::ResolverSettings;
    /// use serde_json::json;
    ///
    /// let settings = ResolverSettings::from_value(json!({
    ///     "project_slug": "my-site",
    ///     "output_dir": "public"
    /// }))
    /// .unwrap();
    /// assert_eq!(settings.project_slug, "my-site");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Append a plugin rule after the existing ones
    pub fn with_plugin(mut self, rule: PluginRule) -> Self {
        self.plugins.push(rule);
        self
    }

    /// Replace the output directory table
    pub fn with_output_dir(mut self, output_dir: ModeTable<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Replace the base path table
    pub fn with_base_path(mut self, base_path: ModeTable<BasePathTemplate>) -> Self {
        self.base_path = base_path;
        self
    }

    /// Whether any mode renders the project slug into its base path.
    pub fn uses_project_slug(&self) -> bool {
        self.base_path
            .iter()
            .any(|(_, template)| *template == BasePathTemplate::Project)
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            project_slug: String::new(),
            base_path: default_base_path(),
            output_dir: default_output_dir(),
            plugins: default_plugins(),
        }
    }
}

fn default_base_path() -> ModeTable<BasePathTemplate> {
    ModeTable::new(BasePathTemplate::Project, BasePathTemplate::Root)
}

fn default_output_dir() -> ModeTable<PathBuf> {
    ModeTable::uniform(PathBuf::from(DEFAULT_OUTPUT_DIR))
}

fn default_plugins() -> Vec<PluginRule> {
    vec![PluginRule::always(PluginDescriptor::new(
        DEFAULT_FRAMEWORK_PLUGIN,
    ))]
}

/// Accept either a `{ production, development }` table or a single value
/// applied to both modes.
fn mode_table<'de, D, T>(deserializer: D) -> Result<ModeTable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Clone,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Table { production: T, development: T },
        Uniform(T),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Table {
            production,
            development,
        } => ModeTable::new(production, development),
        Repr::Uniform(value) => ModeTable::uniform(value),
    })
}
