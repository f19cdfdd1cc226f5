//! Per-mode value table.

use serde::{Deserialize, Serialize};

use crate::environment::Mode;

/// One value per [`Mode`].
///
/// Environment-conditioned settings are stored as tables so that making a
/// value mode-dependent is a data change.
///
/// # Example
///
/// ```
/// use sitecfg_config::{Mode, ModeTable};
///
/// let out_dir = ModeTable::new("docs", "preview");
/// assert_eq!(*out_dir.get(Mode::Production), "docs");
/// assert_eq!(*out_dir.get(Mode::Development), "preview");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTable<T> {
    pub production: T,
    pub development: T,
}

impl<T> ModeTable<T> {
    /// Create a table with a value for each mode
    pub fn new(production: T, development: T) -> Self {
        Self {
            production,
            development,
        }
    }

    /// Value configured for `mode`
    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Production => &self.production,
            Mode::Development => &self.development,
        }
    }

    /// Iterate `(mode, value)` pairs, production first.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &T)> {
        [
            (Mode::Production, &self.production),
            (Mode::Development, &self.development),
        ]
        .into_iter()
    }
}

impl<T: Clone> ModeTable<T> {
    /// Same value for every mode.
    pub fn uniform(value: T) -> Self {
        Self {
            production: value.clone(),
            development: value,
        }
    }
}

impl<T: Default> Default for ModeTable<T> {
    fn default() -> Self {
        Self {
            production: T::default(),
            development: T::default(),
        }
    }
}
