//! Voice command use case: audio or text in, cooking response out.

use crate::collaborator::bounded;
use crate::cooking::{CookingSessionOrchestrator, no_speech};
use fridgechef_core::cooking::CookingResponse;
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::understanding::{ClassifiedIntent, LanguageUnderstanding, Transcriber};
use std::sync::Arc;
use std::time::Duration;

/// Transcribes, classifies and dispatches one cooking-mode utterance.
pub struct VoiceCommandUseCase {
    transcriber: Arc<dyn Transcriber>,
    understanding: Arc<dyn LanguageUnderstanding>,
    orchestrator: Arc<CookingSessionOrchestrator>,
    timeout: Duration,
}

impl VoiceCommandUseCase {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        understanding: Arc<dyn LanguageUnderstanding>,
        orchestrator: Arc<CookingSessionOrchestrator>,
    ) -> Self {
        Self {
            transcriber,
            understanding,
            orchestrator,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Handles a recorded utterance.
    ///
    /// Silence is answered with a "please repeat" reply; any other
    /// transcription failure is returned.
    pub async fn handle_audio(&self, user_id: &str, audio: Vec<u8>) -> Result<CookingResponse> {
        let text = match bounded("transcription", self.timeout, self.transcriber.transcribe(audio))
            .await
        {
            Ok(text) => text,
            Err(FridgeError::NoSpeechDetected) => {
                tracing::debug!(user_id = %user_id, "[Voice] No speech detected");
                return Ok(no_speech());
            }
            Err(err) => return Err(err),
        };
        self.handle_text(user_id, &text).await
    }

    /// Handles an already transcribed utterance.
    ///
    /// When classification fails the utterance is treated as not understood;
    /// the session is left exactly as it was.
    pub async fn handle_text(&self, user_id: &str, text: &str) -> Result<CookingResponse> {
        tracing::info!(user_id = %user_id, "[Voice] Heard: {}", text);

        let intent = match bounded(
            "understanding",
            self.timeout,
            self.understanding.classify_cooking_intent(text),
        )
        .await
        {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(
                    user_id = %user_id,
                    "[Voice] Classification failed, treating as not understood: {}",
                    err
                );
                ClassifiedIntent::not_understood()
            }
        };

        self.orchestrator.handle_cooking_intent(user_id, &intent).await
    }
}
