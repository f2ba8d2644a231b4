//! Recipe catalog gateway.

use super::model::{Recipe, RecipeId};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the recipe catalog.
///
/// Implementations may sit on a database, a public recipe API or a local
/// file. Errors mean the catalog could not be consulted at all; "nothing
/// matched" is always an `Ok` with an empty result.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Finds a recipe by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Recipe))`: Recipe found
    /// - `Ok(None)`: No recipe with this ID
    /// - `Err(_)`: The catalog is unavailable
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>>;

    /// Finds recipes whose title contains `fragment`.
    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Recipe>>;

    /// Finds the recipes for the given IDs. Unknown IDs are skipped.
    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>>;

    /// Finds recipes using the given ingredient names, best match first.
    ///
    /// The ranking heuristic belongs to the catalog. An empty name set means
    /// "recommend anything".
    async fn find_by_ingredients(&self, names: &[String], limit: usize) -> Result<Vec<Recipe>>;
}
