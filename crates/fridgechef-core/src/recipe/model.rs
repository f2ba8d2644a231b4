use serde::{Deserialize, Serialize};

pub type RecipeId = i64;

/// A recipe record borrowed from the catalog.
///
/// The orchestrator only reads these. Steps are derived from `instructions`
/// when a cooking session is created, see [`crate::cooking::split_into_steps`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Raw instruction text, one step per line.
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Free-form taste tags such as "매운" or "담백한".
    #[serde(default)]
    pub tastes: Vec<String>,
}

impl Recipe {
    /// Whether any taste tag mentions the preference (or vice versa).
    pub fn matches_taste(&self, preference: &str) -> bool {
        let preference = preference.trim();
        if preference.is_empty() {
            return true;
        }
        self.tastes
            .iter()
            .any(|taste| taste.contains(preference) || preference.contains(taste.as_str()))
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::from(self)
    }
}

/// Compact view of a recipe returned to recommendation callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            cook_time_minutes: recipe.cook_time_minutes,
            estimated_price: recipe.estimated_price,
            calories: recipe.calories,
        }
    }
}
