//! Logging setup and wiring of the assistant from config and data files.

use anyhow::{Context, Result};
use fridgechef_application::{Collaborators, FridgeAssistant};
use fridgechef_core::config::AssistantConfig;
use fridgechef_infrastructure::{
    ConfigService, FridgePaths, TomlInventoryRepository, TomlRecipeCatalog,
};
use fridgechef_interaction::{OpenAiUnderstandingAgent, WhisperTranscriber};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,fridgechef_application=info,fridgechef_infrastructure=info,fridgechef_interaction=info";

/// Initializes tracing to stderr so it never interleaves with replies on stdout.
///
/// `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "info,fridgechef_application=debug,fridgechef_interaction=debug",
        _ => "debug,fridgechef_application=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

/// A wired assistant plus the background sweeper keeping its session store tidy.
pub struct Runtime {
    pub config: AssistantConfig,
    pub assistant: FridgeAssistant,
    sweeper: Option<JoinHandle<()>>,
}

impl Runtime {
    pub async fn load(config_path: Option<&Path>) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let config = service.get_config()?;

        let catalog_path = data_path(config.data.catalog_path.clone(), FridgePaths::default_catalog_file)?;
        let inventory_path = data_path(
            config.data.inventory_path.clone(),
            FridgePaths::default_inventory_file,
        )?;

        let catalog = TomlRecipeCatalog::load(&catalog_path)
            .await
            .with_context(|| format!("Failed to load recipe catalog {}", catalog_path.display()))?;
        let inventory = TomlInventoryRepository::load(&inventory_path)
            .await
            .with_context(|| format!("Failed to load inventory {}", inventory_path.display()))?;

        let understanding = OpenAiUnderstandingAgent::from_config(&config.openai)?;
        let transcriber = WhisperTranscriber::from_config(&config.openai)?;

        let assistant = FridgeAssistant::new(
            &config,
            Collaborators {
                catalog: Arc::new(catalog),
                inventory: Arc::new(inventory),
                understanding: Arc::new(understanding),
                transcriber: Arc::new(transcriber),
            },
        );
        let sweeper = assistant.start_session_sweeper(&config);

        Ok(Self {
            config,
            assistant,
            sweeper,
        })
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }
    }
}

fn data_path(
    configured: Option<PathBuf>,
    default: fn() -> Result<PathBuf, fridgechef_infrastructure::paths::PathError>,
) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path),
        None => Ok(default()?),
    }
}
