//! TOML-file RecipeCatalog implementation

use crate::dto::CatalogFile;
use async_trait::async_trait;
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::recipe::{Recipe, RecipeCatalog, RecipeId};
use std::path::Path;

/// A recipe catalog read from a TOML file into memory.
///
/// Matching by ingredients ranks recipes by the number of signal ingredients
/// they use, then by ID. Ingredient names are compared exactly after trimming.
pub struct TomlRecipeCatalog {
    recipes: Vec<Recipe>,
}

impl TomlRecipeCatalog {
    /// Loads the catalog from `path`.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FridgeError::io(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "[Catalog] Loaded {} recipe(s) from {}",
            catalog.recipes.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_recipes(file.recipes))
    }

    pub fn from_recipes(mut recipes: Vec<Recipe>) -> Self {
        recipes.sort_by_key(|r| r.id);
        recipes.dedup_by_key(|r| r.id);
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for TomlRecipeCatalog {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Recipe>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.title.contains(fragment))
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn find_by_ingredients(&self, names: &[String], limit: usize) -> Result<Vec<Recipe>> {
        if names.is_empty() {
            return Ok(self.recipes.iter().take(limit).cloned().collect());
        }

        let wanted: Vec<&str> = names.iter().map(|n| n.trim()).collect();
        let mut scored: Vec<(usize, &Recipe)> = self
            .recipes
            .iter()
            .map(|recipe| {
                let overlap = recipe
                    .ingredients
                    .iter()
                    .filter(|i| wanted.contains(&i.trim()))
                    .count();
                (overlap, recipe)
            })
            .filter(|(overlap, _)| *overlap > 0)
            .collect();

        // Stable sort keeps ID order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, recipe)| recipe.clone())
            .collect())
    }
}
