use super::model::{ClassifiedIntent, RecommendationConditions};
use crate::error::Result;
use async_trait::async_trait;

/// Speech-to-text collaborator.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes raw audio bytes.
    ///
    /// Returns [`crate::FridgeError::NoSpeechDetected`] when the audio holds
    /// nothing usable.
    async fn transcribe(&self, audio: Vec<u8>) -> Result<String>;
}

/// Natural-language understanding collaborator.
#[async_trait]
pub trait LanguageUnderstanding: Send + Sync {
    /// Classifies a cooking-mode utterance into an intent with slots.
    async fn classify_cooking_intent(&self, text: &str) -> Result<ClassifiedIntent>;

    /// Extracts recommendation conditions from a free-text request.
    async fn extract_recommendation_conditions(
        &self,
        text: &str,
    ) -> Result<RecommendationConditions>;
}
