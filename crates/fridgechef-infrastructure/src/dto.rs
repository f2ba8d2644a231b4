//! On-disk formats of the file-backed collaborators.

use chrono::NaiveDate;
use fridgechef_core::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// `recipes.toml`: a list of `[[recipe]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "recipe")]
    pub recipes: Vec<Recipe>,
}

/// `inventory.toml`: a list of `[[item]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    #[serde(default, rename = "item")]
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub user_id: String,
    pub name: String,
    /// Best-before date, `YYYY-MM-DD`.
    pub expires_on: NaiveDate,
}
