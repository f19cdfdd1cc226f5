//! Environment snapshot and mode normalization.
//!
//! The resolver never reads process state. Callers capture an [`Environment`]
//! once, either explicitly or via [`Environment::from_process`], and pass it in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Process variable consulted by [`Environment::from_process`].
pub const MODE_VAR: &str = "NODE_ENV";

const PRODUCTION: &str = "production";

/// Build mode after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Production,
    /// Fallback for every value other than an exact `"production"`
    #[default]
    Development,
}

impl Mode {
    /// Normalize a raw mode string.
    ///
    /// Matching is exact and case-sensitive: `"PRODUCTION"` and `" production"`
    /// are development builds, as is an absent value.
    ///
    /// # Example
    ///
    /// ```
    /// use sitecfg_config::Mode;
    ///
    /// assert_eq!(Mode::from_raw(Some("production")), Mode::Production);
    /// assert_eq!(Mode::from_raw(Some("PRODUCTION")), Mode::Development);
    /// assert_eq!(Mode::from_raw(None), Mode::Development);
    /// ```
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(PRODUCTION) => Mode::Production,
            _ => Mode::Development,
        }
    }

    /// Whether this is a production build
    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    /// Lowercase name as accepted in settings and `NODE_ENV`
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of the environment state relevant to resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    mode: Option<String>,
}

impl Environment {
    /// Create a snapshot from an optional raw mode string
    pub fn new(mode: Option<String>) -> Self {
        Self { mode }
    }

    /// Environment with the given mode string.
    pub fn with_mode(mode: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()),
        }
    }

    /// Snapshot `NODE_ENV` from the current process.
    ///
    /// The variable is read exactly once; a value that is not valid unicode
    /// is treated as absent.
    pub fn from_process() -> Self {
        let mode = std::env::var(MODE_VAR).ok();
        tracing::trace!(?mode, "captured {} from process environment", MODE_VAR);
        Self { mode }
    }

    /// Build a snapshot from explicit key/value pairs.
    ///
    /// Later pairs win when a key repeats. Keys other than `NODE_ENV` are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mode = vars
            .into_iter()
            .filter(|(key, _)| key.as_ref() == MODE_VAR)
            .map(|(_, value)| value.into())
            .last();
        Self { mode }
    }

    /// Raw mode string as captured.
    pub fn raw_mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Normalized build mode.
    pub fn mode(&self) -> Mode {
        Mode::from_raw(self.raw_mode())
    }
}
