//! Recommendation candidate narrowing.
//!
//! Turns a set of signal ingredients plus soft constraints into a ranked list
//! of recipes, and remembers that list as the user's recommendation history.

use super::history::RecommendationHistory;
use crate::collaborator::bounded;
use fridgechef_core::error::Result;
use fridgechef_core::inventory::InventoryRepository;
use fridgechef_core::recipe::{Recipe, RecipeCatalog, RecipeSummary};
use fridgechef_core::understanding::RecommendationConditions;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// How many catalog candidates are fetched per returned recipe, so soft
/// constraints have something to choose from.
const CANDIDATE_POOL_FACTOR: usize = 3;

/// Optional narrowing criteria. None of them can empty a non-empty result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoftConstraints {
    pub taste_preference: Option<String>,
    pub time_limit_minutes: Option<u32>,
    pub max_price: Option<u32>,
    pub max_calories: Option<u32>,
}

impl SoftConstraints {
    pub fn is_empty(&self) -> bool {
        self.taste_preference.is_none()
            && self.time_limit_minutes.is_none()
            && self.max_price.is_none()
            && self.max_calories.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationRequest {
    /// Add the user's soon-to-expire items as signals.
    pub use_expiring_ingredients: bool,
    pub must_use_ingredients: Vec<String>,
    /// Substitutes proposed by the language service. Only those the user owns
    /// become signals; all of them are echoed back as suggestions.
    pub substitute_ingredients: Vec<String>,
    pub constraints: SoftConstraints,
}

impl From<RecommendationConditions> for RecommendationRequest {
    fn from(conditions: RecommendationConditions) -> Self {
        Self {
            use_expiring_ingredients: conditions.use_expiring_ingredients,
            must_use_ingredients: conditions.must_use_ingredients,
            substitute_ingredients: conditions.substitute_ingredients,
            constraints: SoftConstraints {
                taste_preference: conditions.taste_preference,
                time_limit_minutes: conditions.time_limit_minutes,
                max_price: conditions.max_price,
                max_calories: conditions.max_calories,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Every substitute the language service proposed, for display.
    pub suggested_ingredients: Vec<String>,
    /// The suggested substitutes the user actually has in the fridge.
    pub matching_ingredients: Vec<String>,
    pub recipes: Vec<RecipeSummary>,
}

/// Builds recommendations and records them as the user's history.
pub struct RecommendationBuilder {
    catalog: Arc<dyn RecipeCatalog>,
    inventory: Arc<dyn InventoryRepository>,
    history: Arc<dyn RecommendationHistory>,
    expiry_days: u32,
    max_results: usize,
    timeout: Duration,
}

impl RecommendationBuilder {
    pub fn new(
        catalog: Arc<dyn RecipeCatalog>,
        inventory: Arc<dyn InventoryRepository>,
        history: Arc<dyn RecommendationHistory>,
    ) -> Self {
        Self {
            catalog,
            inventory,
            history,
            expiry_days: 2,
            max_results: 10,
            timeout: Duration::from_secs(15),
        }
    }

    /// Lookahead window for expiring items.
    pub fn with_expiry_days(mut self, days: u32) -> Self {
        self.expiry_days = days;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a recommendation for `user_id`.
    ///
    /// An empty signal set is a valid "recommend anything" query. An empty
    /// recipe list means nothing matched; collaborator failures are returned
    /// as errors and leave the user's history untouched.
    pub async fn build(
        &self,
        user_id: &str,
        request: &RecommendationRequest,
    ) -> Result<Recommendation> {
        let mut signals = SignalSet::default();

        if request.use_expiring_ingredients {
            let expiring = bounded(
                "inventory",
                self.timeout,
                self.inventory.find_expiring_names(user_id, self.expiry_days),
            )
            .await?;
            tracing::debug!(
                user_id = %user_id,
                "[Recommendation] {} item(s) expiring within {} day(s)",
                expiring.len(),
                self.expiry_days
            );
            signals.extend(expiring);
        }

        signals.extend(request.must_use_ingredients.iter().cloned());

        let matching = if request.substitute_ingredients.is_empty() {
            Vec::new()
        } else {
            bounded(
                "inventory",
                self.timeout,
                self.inventory
                    .find_names_matching(user_id, &request.substitute_ingredients),
            )
            .await?
        };
        signals.extend(matching.iter().cloned());

        let signals = signals.into_vec();
        let pool_size = self.max_results.saturating_mul(CANDIDATE_POOL_FACTOR);
        let candidates = bounded(
            "catalog",
            self.timeout,
            self.catalog.find_by_ingredients(&signals, pool_size),
        )
        .await?;

        let mut recipes = apply_soft_constraints(dedup_by_id(candidates), &request.constraints);
        recipes.truncate(self.max_results);

        let ids = recipes.iter().map(|r| r.id).collect();
        self.history.record(user_id, ids).await;

        tracing::info!(
            user_id = %user_id,
            "[Recommendation] {} recipe(s) for signals {:?}",
            recipes.len(),
            signals
        );

        Ok(Recommendation {
            suggested_ingredients: request.substitute_ingredients.clone(),
            matching_ingredients: matching,
            recipes: recipes.iter().map(RecipeSummary::from).collect(),
        })
    }
}

/// Insertion-ordered set of trimmed, non-empty ingredient names.
#[derive(Default)]
struct SignalSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl SignalSet {
    fn extend(&mut self, names: impl IntoIterator<Item = String>) {
        for name in names {
            let name = name.trim();
            if !name.is_empty() && self.seen.insert(name.to_string()) {
                self.ordered.push(name.to_string());
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

fn dedup_by_id(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes.into_iter().filter(|r| seen.insert(r.id)).collect()
}

/// Narrows `recipes` by each constraint in turn: taste, time, price, calories.
///
/// A recipe without a value for a constraint does not satisfy it. A
/// constraint that would leave nothing is skipped, so the result is empty only
/// when the input was.
pub fn apply_soft_constraints(recipes: Vec<Recipe>, constraints: &SoftConstraints) -> Vec<Recipe> {
    let mut recipes = recipes;

    if let Some(taste) = constraints.taste_preference.as_deref() {
        recipes = narrow(recipes, "taste", |r| r.matches_taste(taste));
    }
    if let Some(limit) = constraints.time_limit_minutes {
        recipes = narrow(recipes, "time", |r| {
            r.cook_time_minutes.is_some_and(|m| m <= limit)
        });
    }
    if let Some(limit) = constraints.max_price {
        recipes = narrow(recipes, "price", |r| {
            r.estimated_price.is_some_and(|p| p <= limit)
        });
    }
    if let Some(limit) = constraints.max_calories {
        recipes = narrow(recipes, "calories", |r| r.calories.is_some_and(|c| c <= limit));
    }

    recipes
}

fn narrow(recipes: Vec<Recipe>, constraint: &str, keep: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
    if !recipes.iter().any(&keep) {
        if !recipes.is_empty() {
            tracing::debug!(
                "[Recommendation] No candidate satisfies the {} constraint, ignoring it",
                constraint
            );
        }
        return recipes;
    }
    recipes.into_iter().filter(|r| keep(r)).collect()
}
