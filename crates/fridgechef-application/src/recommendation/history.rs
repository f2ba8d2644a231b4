//! Most recent recommendation shown to each user.

use async_trait::async_trait;
use fridgechef_core::recipe::RecipeId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Remembers the recipe IDs last presented to each user.
///
/// Voice selection by name is resolved against this list first, so that
/// "that one" means one of the options the user just heard.
#[async_trait]
pub trait RecommendationHistory: Send + Sync {
    /// Replaces the user's history with `recipe_ids`.
    async fn record(&self, user_id: &str, recipe_ids: Vec<RecipeId>);

    /// The IDs last recorded for the user, empty if none.
    async fn last_recommended(&self, user_id: &str) -> Vec<RecipeId>;
}

/// Process-local history, one entry per user, retained for the process lifetime.
#[derive(Default)]
pub struct InMemoryRecommendationHistory {
    entries: RwLock<HashMap<String, Vec<RecipeId>>>,
}

impl InMemoryRecommendationHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecommendationHistory for InMemoryRecommendationHistory {
    async fn record(&self, user_id: &str, recipe_ids: Vec<RecipeId>) {
        let mut entries = self.entries.write().await;
        entries.insert(user_id.to_string(), recipe_ids);
    }

    async fn last_recommended(&self, user_id: &str) -> Vec<RecipeId> {
        let entries = self.entries.read().await;
        entries.get(user_id).cloned().unwrap_or_default()
    }
}
