//! Wiring of the application services from configuration and collaborators.

use crate::cooking::{CookingSessionOrchestrator, InMemorySessionStore, spawn_session_sweeper};
use crate::inventory_advisor::InventoryAdvisor;
use crate::recommendation::{
    InMemoryRecommendationHistory, RecommendationBuilder, RecommendationUseCase,
};
use crate::voice_usecase::VoiceCommandUseCase;
use fridgechef_core::config::AssistantConfig;
use fridgechef_core::inventory::InventoryRepository;
use fridgechef_core::recipe::RecipeCatalog;
use fridgechef_core::understanding::{LanguageUnderstanding, Transcriber};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// External collaborators the assistant depends on.
pub struct Collaborators {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub understanding: Arc<dyn LanguageUnderstanding>,
    pub transcriber: Arc<dyn Transcriber>,
}

/// All application services of one assistant process.
///
/// Sessions and recommendation histories are held in this process only.
pub struct FridgeAssistant {
    pub sessions: Arc<InMemorySessionStore>,
    pub orchestrator: Arc<CookingSessionOrchestrator>,
    pub recommendations: Arc<RecommendationUseCase>,
    pub voice: Arc<VoiceCommandUseCase>,
    pub inventory: Arc<InventoryAdvisor>,
}

impl FridgeAssistant {
    pub fn new(config: &AssistantConfig, collaborators: Collaborators) -> Self {
        let timeout = config.collaborator_timeout();
        let sessions = Arc::new(InMemorySessionStore::with_idle_timeout(
            config.session_idle_timeout(),
        ));
        let history = Arc::new(InMemoryRecommendationHistory::new());

        let orchestrator = Arc::new(
            CookingSessionOrchestrator::new(
                sessions.clone(),
                history.clone(),
                collaborators.catalog.clone(),
            )
            .with_timeout(timeout),
        );

        let builder = Arc::new(
            RecommendationBuilder::new(
                collaborators.catalog.clone(),
                collaborators.inventory.clone(),
                history,
            )
            .with_expiry_days(config.recommendation_expiry_days)
            .with_max_results(config.max_recommendations)
            .with_timeout(timeout),
        );

        let recommendations = Arc::new(
            RecommendationUseCase::new(collaborators.understanding.clone(), builder)
                .with_timeout(timeout),
        );

        let voice = Arc::new(
            VoiceCommandUseCase::new(
                collaborators.transcriber,
                collaborators.understanding,
                orchestrator.clone(),
            )
            .with_timeout(timeout),
        );

        let inventory = Arc::new(
            InventoryAdvisor::new(collaborators.inventory)
                .with_window(config.inventory_check_expiry_days)
                .with_timeout(timeout),
        );

        tracing::info!(
            "[Assistant] Ready (idle timeout: {:?}, collaborator timeout: {:?})",
            config.session_idle_timeout(),
            timeout
        );

        Self {
            sessions,
            orchestrator,
            recommendations,
            voice,
            inventory,
        }
    }

    /// Starts the background sweep of idle sessions, if expiry is enabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_session_sweeper(&self, config: &AssistantConfig) -> Option<JoinHandle<()>> {
        config.session_idle_timeout()?;
        Some(spawn_session_sweeper(
            self.sessions.clone(),
            config.session_sweep_interval(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EchoTranscriber, MockCatalog, MockInventory, MockUnderstanding, recipe};
    use crate::cooking::SessionStore;
    use fridgechef_core::cooking::{ActionType, StepPosition};
    use fridgechef_core::understanding::{ClassifiedIntent, CookingIntent, RecommendationConditions};

    fn build_assistant(config: &AssistantConfig) -> FridgeAssistant {
        let catalog = Arc::new(MockCatalog::with(vec![
            recipe(1, "김치볶음밥", "김치를 볶는다.\n밥을 넣는다.", &["김치", "밥"]),
            recipe(2, "오므라이스", "밥을 볶는다.\n달걀로 감싼다.", &["밥", "달걀"]),
            recipe(3, "계란국", "물을 끓인다.\n달걀을 푼다.", &["달걀"]),
        ]));
        let inventory = Arc::new(MockInventory::default());
        inventory.add("alice", "달걀", 1);
        let understanding = Arc::new(MockUnderstanding::default());
        understanding.on_conditions(
            "달걀 빨리 써야 해",
            RecommendationConditions {
                use_expiring_ingredients: true,
                ..Default::default()
            },
        );
        understanding.on_intent("김치볶음밥으로 할게", ClassifiedIntent::select_by_name("김치볶음밥"));
        understanding.on_intent("계란국으로 할게", ClassifiedIntent::select_by_name("계란국"));
        understanding.on_intent("다음", ClassifiedIntent::new(CookingIntent::Next));
        FridgeAssistant::new(
            config,
            Collaborators {
                catalog,
                inventory,
                understanding,
                transcriber: Arc::new(EchoTranscriber),
            },
        )
    }

    #[tokio::test]
    async fn test_recommend_then_select_by_voice() {
        let config = AssistantConfig::default();
        let assistant = build_assistant(&config);

        let recommendation = assistant
            .recommendations
            .recommend_from_text("alice", "달걀 빨리 써야 해")
            .await
            .unwrap();
        let titles: Vec<_> = recommendation.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["오므라이스", "계란국"]);

        // 김치볶음밥 exists in the catalog but was not just recommended.
        let response = assistant
            .voice
            .handle_text("alice", "김치볶음밥으로 할게")
            .await
            .unwrap();
        assert!(response.is_rejected());

        assistant.voice.handle_text("alice", "계란국으로 할게").await.unwrap();
        assistant.voice.handle_text("alice", "다음").await.unwrap();
        assistant.voice.handle_text("alice", "다음").await.unwrap();
        assert_eq!(
            assistant.sessions.get("alice").await.unwrap().position(),
            StepPosition::OnStep(1)
        );
        let response = assistant.voice.handle_text("alice", "다음").await.unwrap();
        assert_eq!(response.action_type, ActionType::Finish);
    }

    #[tokio::test]
    async fn test_inventory_advisor_uses_configured_window() {
        let config = AssistantConfig {
            inventory_check_expiry_days: 0,
            ..Default::default()
        };
        let assistant = build_assistant(&config);
        let report = assistant.inventory.expiring_soon("alice").await.unwrap();
        assert!(report.names.is_empty());
    }

    #[tokio::test]
    async fn test_sweeper_only_with_idle_timeout() {
        let config = AssistantConfig {
            session_idle_timeout_secs: 0,
            ..Default::default()
        };
        let assistant = build_assistant(&config);
        assert!(assistant.start_session_sweeper(&config).is_none());

        let config = AssistantConfig::default();
        let assistant = build_assistant(&config);
        let handle = assistant.start_session_sweeper(&config).unwrap();
        handle.abort();
    }
}
