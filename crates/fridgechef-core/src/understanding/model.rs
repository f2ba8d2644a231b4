use crate::recipe::RecipeId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// A classified voice command category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CookingIntent {
    Select,
    Ingredients,
    StartCooking,
    Next,
    Previous,
    Timer,
    Stop,
    /// The classifier could not map the utterance to a command.
    #[serde(other)]
    Unknown,
}

impl CookingIntent {
    /// Parses a label produced by the classifier, mapping anything unexpected to `Unknown`.
    pub fn parse_lenient(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or(Self::Unknown)
    }
}

/// A classified intent together with its slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIntent {
    pub intent: CookingIntent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
}

impl ClassifiedIntent {
    pub fn new(intent: CookingIntent) -> Self {
        Self {
            intent,
            timer_seconds: None,
            recipe_name: None,
            recipe_id: None,
        }
    }

    pub fn select_by_name(name: impl Into<String>) -> Self {
        Self {
            recipe_name: Some(name.into()),
            ..Self::new(CookingIntent::Select)
        }
    }

    pub fn select_by_id(id: RecipeId) -> Self {
        Self {
            recipe_id: Some(id),
            ..Self::new(CookingIntent::Select)
        }
    }

    pub fn timer(seconds: u32) -> Self {
        Self {
            timer_seconds: Some(seconds),
            ..Self::new(CookingIntent::Timer)
        }
    }

    pub fn not_understood() -> Self {
        Self::new(CookingIntent::Unknown)
    }
}

/// Recommendation conditions extracted from a free-text request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationConditions {
    pub use_expiring_ingredients: bool,
    pub taste_preference: Option<String>,
    pub must_use_ingredients: Vec<String>,
    pub time_limit_minutes: Option<u32>,
    /// An ingredient the user said they are out of.
    pub missing_ingredient: Option<String>,
    /// Substitutes proposed for `missing_ingredient`, whether on hand or not.
    pub substitute_ingredients: Vec<String>,
    pub max_price: Option<u32>,
    pub max_calories: Option<u32>,
}
