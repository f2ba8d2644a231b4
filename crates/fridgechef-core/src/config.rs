//! Configuration model for the assistant.
//!
//! Loaded from `~/.config/fridgechef/config.toml` by the infrastructure
//! layer. Every field has a default so a missing or partial file still yields
//! a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    /// Lookahead window for expiring items when a recommendation is requested.
    pub recommendation_expiry_days: u32,
    /// Lookahead window for "what is about to expire?" chat queries.
    pub inventory_check_expiry_days: u32,
    /// Upper bound on the number of recipes returned by one recommendation.
    pub max_recommendations: usize,
    /// Idle time after which a cooking session is discarded. `0` disables expiry.
    pub session_idle_timeout_secs: u64,
    /// Period of the background sweep over idle sessions.
    pub session_sweep_interval_secs: u64,
    /// Time budget for a single catalog/inventory/understanding call.
    pub collaborator_timeout_secs: u64,
    pub openai: OpenAiConfig,
    pub data: DataConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            recommendation_expiry_days: 2,
            inventory_check_expiry_days: 3,
            max_recommendations: 10,
            session_idle_timeout_secs: 3600,
            session_sweep_interval_secs: 60,
            collaborator_timeout_secs: 15,
            openai: OpenAiConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl AssistantConfig {
    pub fn session_idle_timeout(&self) -> Option<Duration> {
        match self.session_idle_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs.max(1))
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs.max(1))
    }
}

/// OpenAI-compatible endpoint used for intent classification and transcription.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub transcription_model: String,
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

/// Locations of the file-backed catalog and inventory.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub catalog_path: Option<PathBuf>,
    pub inventory_path: Option<PathBuf>,
}
