//! In-memory collaborator fakes shared by the unit tests of this crate.

use async_trait::async_trait;
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::inventory::InventoryRepository;
use fridgechef_core::recipe::{Recipe, RecipeCatalog, RecipeId};
use fridgechef_core::understanding::{
    ClassifiedIntent, LanguageUnderstanding, RecommendationConditions, Transcriber,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub fn recipe(id: RecipeId, title: &str, instructions: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        instructions: instructions.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cook_time_minutes: None,
        estimated_price: None,
        calories: None,
        tastes: vec![],
    }
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Default)]
pub struct MockCatalog {
    recipes: Mutex<Vec<Recipe>>,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
    ingredient_queries: Mutex<Vec<Vec<String>>>,
}

impl MockCatalog {
    pub fn with(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn replace(&self, recipe: Recipe) {
        let mut recipes = self.recipes.lock().unwrap();
        recipes.retain(|r| r.id != recipe.id);
        recipes.push(recipe);
    }

    pub fn ingredient_queries(&self) -> Vec<Vec<String>> {
        self.ingredient_queries.lock().unwrap().clone()
    }

    async fn guard(&self) -> Result<()> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(FridgeError::collaborator("catalog", "connection refused"));
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<Recipe> {
        let mut recipes = self.recipes.lock().unwrap().clone();
        recipes.sort_by_key(|r| r.id);
        recipes
    }
}

#[async_trait]
impl RecipeCatalog for MockCatalog {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>> {
        self.guard().await?;
        Ok(self.snapshot().into_iter().find(|r| r.id == id))
    }

    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Recipe>> {
        self.guard().await?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|r| r.title.contains(fragment))
            .collect())
    }

    async fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>> {
        self.guard().await?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|r| ids.contains(&r.id))
            .collect())
    }

    async fn find_by_ingredients(&self, names: &[String], limit: usize) -> Result<Vec<Recipe>> {
        self.guard().await?;
        self.ingredient_queries.lock().unwrap().push(names.to_vec());
        let mut scored: Vec<(usize, Recipe)> = self
            .snapshot()
            .into_iter()
            .map(|r| {
                let overlap = r.ingredients.iter().filter(|i| names.contains(i)).count();
                (overlap, r)
            })
            .filter(|(overlap, _)| names.is_empty() || *overlap > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
        Ok(scored.into_iter().map(|(_, r)| r).take(limit).collect())
    }
}

/// Inventory fake: user -> (name, days until expiry).
#[derive(Default)]
pub struct MockInventory {
    items: Mutex<HashMap<String, Vec<(String, u32)>>>,
    failing: AtomicBool,
}

impl MockInventory {
    pub fn add(&self, user_id: &str, name: &str, expires_in_days: u32) {
        self.items
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push((name.to_string(), expires_in_days));
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FridgeError::collaborator("inventory", "unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for MockInventory {
    async fn find_expiring_names(&self, user_id: &str, within_days: u32) -> Result<Vec<String>> {
        self.check()?;
        let items = self.items.lock().unwrap();
        Ok(items
            .get(user_id)
            .map(|list| {
                list.iter()
                    .filter(|(_, days)| *days <= within_days)
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_names_matching(
        &self,
        user_id: &str,
        candidates: &[String],
    ) -> Result<Vec<String>> {
        self.check()?;
        let items = self.items.lock().unwrap();
        let owned: Vec<&String> = items
            .get(user_id)
            .map(|list| list.iter().map(|(name, _)| name).collect())
            .unwrap_or_default();
        Ok(candidates
            .iter()
            .filter(|c| owned.contains(c))
            .cloned()
            .collect())
    }
}

/// Understanding fake answering from canned tables keyed by the exact text.
#[derive(Default)]
pub struct MockUnderstanding {
    intents: Mutex<HashMap<String, ClassifiedIntent>>,
    conditions: Mutex<HashMap<String, RecommendationConditions>>,
}

impl MockUnderstanding {
    pub fn on_intent(&self, text: &str, intent: ClassifiedIntent) {
        self.intents.lock().unwrap().insert(text.to_string(), intent);
    }

    pub fn on_conditions(&self, text: &str, conditions: RecommendationConditions) {
        self.conditions
            .lock()
            .unwrap()
            .insert(text.to_string(), conditions);
    }
}

#[async_trait]
impl LanguageUnderstanding for MockUnderstanding {
    async fn classify_cooking_intent(&self, text: &str) -> Result<ClassifiedIntent> {
        self.intents
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .ok_or_else(|| FridgeError::collaborator("understanding", "malformed reply"))
    }

    async fn extract_recommendation_conditions(
        &self,
        text: &str,
    ) -> Result<RecommendationConditions> {
        self.conditions
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .ok_or_else(|| FridgeError::collaborator("understanding", "malformed reply"))
    }
}

/// Transcriber fake that decodes the audio bytes as UTF-8 text.
pub struct EchoTranscriber;

#[async_trait]
impl Transcriber for EchoTranscriber {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<String> {
        let text = String::from_utf8(audio)
            .map_err(|e| FridgeError::collaborator("transcription", e.to_string()))?;
        if text.trim().is_empty() {
            return Err(FridgeError::NoSpeechDetected);
        }
        Ok(text)
    }
}
