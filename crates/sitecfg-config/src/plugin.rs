use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::Mode;

/// Opaque reference to a build-pipeline extension.
///
/// The resolver forwards descriptors to the bundler in order and never
/// interprets `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Registered plugin name (e.g. `"vue"`)
    pub name: String,

    /// Plugin-specific options forwarded untouched
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    /// Create a descriptor with no options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    /// Attach options forwarded to the plugin as-is
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// Modes in which a plugin is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginCondition {
    #[default]
    Always,
    Production,
    Development,
}

impl PluginCondition {
    /// Whether a plugin with this condition is included in `mode`
    pub fn matches(self, mode: Mode) -> bool {
        match self {
            PluginCondition::Always => true,
            PluginCondition::Production => mode == Mode::Production,
            PluginCondition::Development => mode == Mode::Development,
        }
    }
}

/// A plugin plus the condition under which it joins the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginRule {
    #[serde(flatten)]
    pub plugin: PluginDescriptor,

    #[serde(default)]
    pub when: PluginCondition,
}

impl PluginRule {
    /// Include `plugin` in every mode
    pub fn always(plugin: PluginDescriptor) -> Self {
        Self {
            plugin,
            when: PluginCondition::Always,
        }
    }

    /// Include `plugin` in production builds only
    pub fn production_only(plugin: PluginDescriptor) -> Self {
        Self {
            plugin,
            when: PluginCondition::Production,
        }
    }

    /// Include `plugin` in development builds only (e.g. an inspector)
    pub fn development_only(plugin: PluginDescriptor) -> Self {
        Self {
            plugin,
            when: PluginCondition::Development,
        }
    }

    /// Whether this rule adds its plugin in `mode`
    pub fn applies(&self, mode: Mode) -> bool {
        self.when.matches(mode)
    }
}

/// Plugins that apply in `mode`, in declaration order.
pub fn select_plugins(rules: &[PluginRule], mode: Mode) -> Vec<PluginDescriptor> {
    rules
        .iter()
        .filter(|rule| rule.applies(mode))
        .map(|rule| rule.plugin.clone())
        .collect()
}
