//! # Configuration
//!
//! [`PanelConfig`] carries everything the controller needs at construction:
//! both catalogs plus where table files live. It is plain JSON on disk.
//!
//! ```json
//! {
//!   "data_dir": "",
//!   "history_dir": "data/history",
//!   "history_tail": 100,
//!   "categories": { "Fruits": ["Apple", "Banana", "Cherry"] },
//!   "indexes": { "Dow Jones": "data/summary/wikipedia_dowjones.csv" }
//! }
//! ```
//!
//! Missing fields fall back to the built-in demo values.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{default_categories, default_indexes, CategoryCatalog, IndexCatalog};
use crate::errors::{PanelError, PanelResult};

/// Rows kept from the end of a symbol history file
pub const DEFAULT_HISTORY_TAIL: usize = 100;

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Base directory that index and history paths are resolved against
    pub data_dir: PathBuf,

    /// Directory (relative to `data_dir`) holding `{symbol}.csv` history files
    pub history_dir: PathBuf,

    /// Number of trailing history rows to display
    pub history_tail: usize,

    pub categories: CategoryCatalog,

    pub indexes: IndexCatalog,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            data_dir: PathBuf::new(),
            history_dir: PathBuf::from("data/history"),
            history_tail: DEFAULT_HISTORY_TAIL,
            categories: default_categories(),
            indexes: default_indexes(),
        }
    }
}

impl PanelConfig {
    /// Load and validate a config file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use panel_core::config::PanelConfig;
    /// use std::path::Path;
    ///
    /// let config = PanelConfig::load(Path::new("config/panel.json"))?;
    /// println!("{} categories", config.categories.len());
    /// # Ok::<(), panel_core::errors::PanelError>(())
    /// ```
    pub fn load(path: &Path) -> PanelResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PanelError::config(path.display().to_string(), e.to_string()))?;

        let config: PanelConfig = serde_json::from_str(&contents).map_err(|e| {
            PanelError::config(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Builder-style override of the base data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    fn validate(&self, path: &Path) -> PanelResult<()> {
        if self.history_tail == 0 {
            return Err(PanelError::config(
                path.display().to_string(),
                "history_tail must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve the summary file for an index, if the index is known.
    ///
    /// Absolute catalog paths are used as-is.
    pub fn index_path(&self, name: &str) -> Option<PathBuf> {
        self.indexes.path_for(name).map(|p| self.data_dir.join(p))
    }

    /// Resolve the history file for a symbol: `{data_dir}/{history_dir}/{symbol}.csv`
    ///
    /// Returns `None` unless the symbol is a single plain path component, so
    /// table contents can never point outside the history directory.
    pub fn history_path(&self, symbol: &str) -> Option<PathBuf> {
        if symbol.contains(['/', '\\']) {
            return None;
        }
        let mut components = Path::new(symbol).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(
                self.data_dir
                    .join(&self.history_dir)
                    .join(format!("{}.csv", symbol)),
            ),
            _ => None,
        }
    }
}
