//! Configuration types for Stockroom

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EmptyStorePathError, StockroomError};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "stockroom.json";

/// Where each store keeps its JSON document (stockroom.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockroomConfig {
    /// Inventory store file
    #[serde(default = "default_inventory_file")]
    pub inventory_file: PathBuf,

    /// Task tracker store file
    #[serde(default = "default_tasks_file")]
    pub tasks_file: PathBuf,
}

fn default_inventory_file() -> PathBuf {
    PathBuf::from("inventory.json")
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            tasks_file: default_tasks_file(),
        }
    }
}

impl StockroomConfig {
    /// Load configuration from a JSON file
    ///
    /// Relative store paths are taken relative to the config file's directory.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)
            .map_err(|e| StockroomError::Config(format!("{}: {}", path.display(), e)))?;

        config.check_paths(path)?;
        if let Some(base) = path.parent() {
            config.resolve_against(base);
        }
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_paths(&self, config_path: &Path) -> crate::Result<()> {
        for (store, file) in [("inventory", &self.inventory_file), ("tasks", &self.tasks_file)] {
            if file.as_os_str().is_empty() {
                return Err(EmptyStorePathError {
                    store,
                    config_path: config_path.to_path_buf(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn resolve_against(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        for file in [&mut self.inventory_file, &mut self.tasks_file] {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}
