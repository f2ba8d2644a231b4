//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/fridgechef/config.toml`
//! (or `$FRIDGECHEF_CONFIG`) and caches it.

use crate::paths::FridgePaths;
use fridgechef_core::config::AssistantConfig;
use fridgechef_core::error::{FridgeError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration service that loads and caches the assistant configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AssistantConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a specific file (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it from file on first access.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn get_config(&self) -> Result<AssistantConfig> {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let path = match &self.path {
            Some(path) => path.clone(),
            None => FridgePaths::config_file().map_err(|e| FridgeError::config(e.to_string()))?,
        };
        let mut loaded = Self::load_from(&path)?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());

        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    fn load_from(path: &Path) -> Result<AssistantConfig> {
        if !path.exists() {
            tracing::info!(
                "[ConfigService] No config at {}, using defaults",
                path.display()
            );
            return Ok(AssistantConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FridgeError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            FridgeError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills OpenAI settings the file left out from `OPENAI_API_KEY` / `OPENAI_MODEL_NAME`.
fn apply_env_overrides(config: &mut AssistantConfig, env: impl Fn(&str) -> Option<String>) {
    if config.openai.api_key.is_none() {
        config.openai.api_key = env("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
    }
    if let Some(model) = env("OPENAI_MODEL_NAME") {
        config.openai.model = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_fills_missing_api_key_only() {
        let env = |key: &str| match key {
            "OPENAI_API_KEY" => Some("sk-env".to_string()),
            _ => None,
        };

        let mut config = AssistantConfig::default();
        apply_env_overrides(&mut config, env);
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-env"));

        let mut config = AssistantConfig::default();
        config.openai.api_key = Some("sk-file".to_string());
        apply_env_overrides(&mut config, env);
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn test_env_model_override() {
        let mut config = AssistantConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == "OPENAI_MODEL_NAME").then(|| "gpt-4o".to_string())
        });
        assert_eq!(config.openai.model, "gpt-4o");
    }
}
