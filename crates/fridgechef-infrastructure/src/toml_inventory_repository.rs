//! TOML-file InventoryRepository implementation

use crate::dto::{InventoryFile, InventoryItem};
use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::inventory::InventoryRepository;
use std::path::Path;

/// Refrigerator contents of all users, read from a TOML file.
pub struct TomlInventoryRepository {
    items: Vec<InventoryItem>,
    today: Option<NaiveDate>,
}

impl TomlInventoryRepository {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FridgeError::io(format!("Failed to read inventory {}: {}", path.display(), e))
        })?;
        let repository = Self::from_toml_str(&content)?;
        tracing::info!(
            "[Inventory] Loaded {} item(s) from {}",
            repository.items.len(),
            path.display()
        );
        Ok(repository)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: InventoryFile = toml::from_str(content)?;
        Ok(Self::from_items(file.items))
    }

    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items, today: None }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn items_of<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a InventoryItem> + 'a {
        self.items.iter().filter(move |item| item.user_id == user_id)
    }
}

#[async_trait]
impl InventoryRepository for TomlInventoryRepository {
    async fn find_expiring_names(&self, user_id: &str, within_days: u32) -> Result<Vec<String>> {
        let today = self.today();
        let horizon = today
            .checked_add_days(Days::new(u64::from(within_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut names: Vec<String> = Vec::new();
        for item in self.items_of(user_id) {
            if item.expires_on >= today
                && item.expires_on <= horizon
                && !names.contains(&item.name)
            {
                names.push(item.name.clone());
            }
        }
        Ok(names)
    }

    async fn find_names_matching(
        &self,
        user_id: &str,
        candidates: &[String],
    ) -> Result<Vec<String>> {
        Ok(candidates
            .iter()
            .filter(|candidate| {
                self.items_of(user_id)
                    .any(|item| item.name.trim() == candidate.trim())
            })
            .cloned()
            .collect())
    }
}
