//! Routes a classified intent to the orchestrator operation that handles it.

use super::messages;
use super::orchestrator::CookingSessionOrchestrator;
use fridgechef_core::cooking::CookingResponse;
use fridgechef_core::error::Result;
use fridgechef_core::understanding::{ClassifiedIntent, CookingIntent};

impl CookingSessionOrchestrator {
    /// Handles one classified voice command for `user_id`.
    ///
    /// User-level problems come back as a response with a rejection; only
    /// collaborator failures are returned as `Err`.
    pub async fn handle_cooking_intent(
        &self,
        user_id: &str,
        intent: &ClassifiedIntent,
    ) -> Result<CookingResponse> {
        tracing::debug!(user_id = %user_id, "[Dispatcher] {:?}", intent);

        match intent.intent {
            CookingIntent::Select => {
                self.select(user_id, intent.recipe_name.as_deref(), intent.recipe_id)
                    .await
            }
            CookingIntent::Ingredients => self.ingredients(user_id).await,
            CookingIntent::StartCooking => self.start_cooking(user_id).await,
            CookingIntent::Next => self.next_step(user_id).await,
            CookingIntent::Previous => self.repeat_step(user_id).await,
            CookingIntent::Timer => Ok(self.set_timer(user_id, intent.timer_seconds)),
            CookingIntent::Stop => self.stop(user_id).await,
            CookingIntent::Unknown => Ok(messages::not_understood()),
        }
    }
}
