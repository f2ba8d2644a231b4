//! Free-text recommendation use case.

use super::builder::{Recommendation, RecommendationBuilder, RecommendationRequest};
use crate::collaborator::bounded;
use fridgechef_core::error::Result;
use fridgechef_core::understanding::LanguageUnderstanding;
use std::sync::Arc;
use std::time::Duration;

/// Answers requests like "우유가 없는데 유통기한 임박한 걸로 뭐 해먹지?".
///
/// Conditions are extracted by the language service and handed to the
/// builder. Extraction failures are returned to the caller: guessing
/// conditions would silently change which recipes are ranked.
pub struct RecommendationUseCase {
    understanding: Arc<dyn LanguageUnderstanding>,
    builder: Arc<RecommendationBuilder>,
    timeout: Duration,
}

impl RecommendationUseCase {
    pub fn new(
        understanding: Arc<dyn LanguageUnderstanding>,
        builder: Arc<RecommendationBuilder>,
    ) -> Self {
        Self {
            understanding,
            builder,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn recommend_from_text(&self, user_id: &str, text: &str) -> Result<Recommendation> {
        let conditions = bounded(
            "understanding",
            self.timeout,
            self.understanding.extract_recommendation_conditions(text),
        )
        .await?;

        if let Some(missing) = conditions.missing_ingredient.as_deref() {
            tracing::info!(
                user_id = %user_id,
                "[Recommendation] User is out of '{}', substitutes: {:?}",
                missing,
                conditions.substitute_ingredients
            );
        }

        let request = RecommendationRequest::from(conditions);
        self.builder.build(user_id, &request).await
    }

    /// Builds a recommendation from an already structured request.
    pub async fn recommend(
        &self,
        user_id: &str,
        request: &RecommendationRequest,
    ) -> Result<Recommendation> {
        self.builder.build(user_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{InMemoryRecommendationHistory, RecommendationHistory};
    use crate::testing::{MockCatalog, MockInventory, MockUnderstanding, names, recipe};
    use fridgechef_core::understanding::RecommendationConditions;

    #[tokio::test]
    async fn test_recommend_from_text_with_missing_ingredient() {
        let catalog = Arc::new(MockCatalog::with(vec![
            recipe(1, "크림리조또", "", &["쌀", "생크림"]),
            recipe(2, "치즈리조또", "", &["쌀", "치즈"]),
        ]));
        let inventory = Arc::new(MockInventory::default());
        inventory.add("alice", "치즈", 5);
        let history = Arc::new(InMemoryRecommendationHistory::new());
        let understanding = Arc::new(MockUnderstanding::default());
        understanding.on_conditions(
            "우유가 없는데 리조또 해먹고 싶어",
            RecommendationConditions {
                missing_ingredient: Some("우유".to_string()),
                substitute_ingredients: names(&["두유", "생크림", "치즈"]),
                ..Default::default()
            },
        );
        let builder = Arc::new(RecommendationBuilder::new(
            catalog,
            inventory,
            history.clone(),
        ));
        let usecase = RecommendationUseCase::new(understanding, builder);

        let result = usecase
            .recommend_from_text("alice", "우유가 없는데 리조또 해먹고 싶어")
            .await
            .unwrap();

        assert_eq!(result.matching_ingredients, vec!["치즈"]);
        assert_eq!(result.suggested_ingredients, vec!["두유", "생크림", "치즈"]);
        assert_eq!(result.recipes[0].title, "치즈리조또");
        assert_eq!(history.last_recommended("alice").await, vec![2]);
    }

    #[tokio::test]
    async fn test_extraction_failure_is_returned() {
        let builder = Arc::new(RecommendationBuilder::new(
            Arc::new(MockCatalog::default()),
            Arc::new(MockInventory::default()),
            Arc::new(InMemoryRecommendationHistory::new()),
        ));
        let usecase = RecommendationUseCase::new(Arc::new(MockUnderstanding::default()), builder);

        let err = usecase
            .recommend_from_text("alice", "아무거나")
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
