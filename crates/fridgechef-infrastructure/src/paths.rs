//! Path management for fridgechef configuration and data files.
//!
//! ```text
//! ~/.config/fridgechef/
//! ├── config.toml        # AssistantConfig
//! ├── recipes.toml       # Default recipe catalog
//! └── inventory.toml     # Default refrigerator inventory
//! ```

use std::path::PathBuf;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "FRIDGECHEF_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct FridgePaths;

impl FridgePaths {
    /// Returns `~/.config/fridgechef` (platform equivalent elsewhere).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("fridgechef"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the config file path, honouring `FRIDGECHEF_CONFIG`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn default_catalog_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("recipes.toml"))
    }

    pub fn default_inventory_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("inventory.toml"))
    }
}
