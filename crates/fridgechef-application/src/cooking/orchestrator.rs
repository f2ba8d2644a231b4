//! Guided-cooking state machine.
//!
//! Each operation corresponds to one voice intent. Read-modify-write
//! transitions (start, next, previous) run as pure functions inside
//! [`SessionStore::apply`], so two commands arriving together for the same
//! user are applied one after the other.
//!
//! | State          | Intent        | Next state                      |
//! |----------------|---------------|---------------------------------|
//! | any            | SELECT        | Selected                        |
//! | Selected       | START / NEXT  | step 1 (or finished if no steps)|
//! | Selected       | PREVIOUS      | Selected (not started yet)      |
//! | step i         | NEXT          | step i+1, or removed after last |
//! | step i         | PREVIOUS      | step i (repeated, not decremented) |
//! | any            | STOP          | removed                         |

use super::messages;
use super::store::{SessionChange, SessionMutation, SessionStore};
use crate::collaborator::bounded;
use crate::recommendation::RecommendationHistory;
use fridgechef_core::cooking::{Advance, CookingResponse, CookingSession, StepPosition};
use fridgechef_core::error::Result;
use fridgechef_core::recipe::{Recipe, RecipeCatalog, RecipeId};
use std::sync::Arc;
use std::time::Duration;

/// Drives cooking sessions from classified intents.
pub struct CookingSessionOrchestrator {
    sessions: Arc<dyn SessionStore>,
    history: Arc<dyn RecommendationHistory>,
    catalog: Arc<dyn RecipeCatalog>,
    timeout: Duration,
}

impl CookingSessionOrchestrator {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        history: Arc<dyn RecommendationHistory>,
        catalog: Arc<dyn RecipeCatalog>,
    ) -> Self {
        Self {
            sessions,
            history,
            catalog,
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the time budget for each catalog call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read access to the session store, for callers that inspect state.
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Selects a recipe by ID or by spoken name and opens a fresh session.
    ///
    /// Any existing session for the user is replaced. When both are given the
    /// ID wins.
    pub async fn select(
        &self,
        user_id: &str,
        recipe_name: Option<&str>,
        recipe_id: Option<RecipeId>,
    ) -> Result<CookingResponse> {
        let recipe = match (recipe_id, recipe_name.map(str::trim)) {
            (Some(id), _) => match self.find_recipe(id).await? {
                Some(recipe) => recipe,
                None => return Ok(messages::recipe_not_found(&id.to_string())),
            },
            (None, Some(name)) if !name.is_empty() => {
                match self.resolve_by_name(user_id, name).await? {
                    Ok(recipe) => recipe,
                    Err(rejection) => return Ok(rejection),
                }
            }
            _ => return Ok(messages::missing_recipe_slot()),
        };

        let session = CookingSession::from_recipe(user_id, &recipe);
        tracing::info!(
            user_id = %user_id,
            recipe_id = recipe.id,
            "[Orchestrator] Selected '{}' ({} steps)",
            recipe.title,
            session.steps().len()
        );
        self.sessions.put(session).await;

        Ok(messages::selected(&recipe.title))
    }

    /// Resolves a spoken recipe name.
    ///
    /// With a recommendation history, only the recipes just shown are
    /// candidates and there is no fallback to the whole catalog. Without one,
    /// the first catalog title match is taken. Both paths ignore whitespace.
    async fn resolve_by_name(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<std::result::Result<Recipe, CookingResponse>> {
        let recommended = self.history.last_recommended(user_id).await;

        if !recommended.is_empty() {
            let mut shown = bounded("catalog", self.timeout, self.catalog.find_by_ids(&recommended))
                .await?;
            shown.sort_by_key(|r| recommended.iter().position(|id| *id == r.id));
            return Ok(shown
                .into_iter()
                .find(|r| title_matches(&r.title, name))
                .ok_or_else(|| {
                    tracing::debug!(
                        user_id = %user_id,
                        "[Orchestrator] '{}' is not among {:?}",
                        name,
                        recommended
                    );
                    messages::not_in_recommended_list(name)
                }));
        }

        // The catalog matches substrings exactly, so a name spoken with extra
        // spaces is retried with its longest word and filtered here.
        let mut queries = vec![name];
        if let Some(word) = name.split_whitespace().max_by_key(|w| w.chars().count()) {
            if word != name {
                queries.push(word);
            }
        }
        for query in queries {
            let found = bounded(
                "catalog",
                self.timeout,
                self.catalog.find_by_title_containing(query),
            )
            .await?;
            if let Some(recipe) = found.into_iter().find(|r| title_matches(&r.title, name)) {
                return Ok(Ok(recipe));
            }
        }
        Ok(Err(messages::recipe_not_found(name)))
    }

    async fn find_recipe(&self, id: RecipeId) -> Result<Option<Recipe>> {
        bounded("catalog", self.timeout, self.catalog.find_by_id(id)).await
    }

    /// Lists the ingredients of the selected recipe. Leaves the session as is.
    pub async fn ingredients(&self, user_id: &str) -> Result<CookingResponse> {
        let Some(session) = self.sessions.get(user_id).await else {
            return Ok(messages::no_session());
        };
        match self.find_recipe(session.recipe_id).await? {
            Some(recipe) => Ok(messages::ingredients(&session.recipe_title, &recipe.ingredients)),
            None => Ok(messages::recipe_not_found(&session.recipe_title)),
        }
    }

    /// Starts cooking: Selected -> step 1. Already cooking re-reads the current step.
    pub async fn start_cooking(&self, user_id: &str) -> Result<CookingResponse> {
        Ok(self.sessions.apply(user_id, start_transition()).await)
    }

    /// Advances one step, finishing the session after the last one.
    pub async fn next_step(&self, user_id: &str) -> Result<CookingResponse> {
        Ok(self.sessions.apply(user_id, next_transition()).await)
    }

    /// "Previous" repeats the current step. It never moves the pointer back.
    pub async fn repeat_step(&self, user_id: &str) -> Result<CookingResponse> {
        Ok(self.sessions.apply(user_id, repeat_transition()).await)
    }

    /// Echoes a timer request. Counting down is the client's job.
    pub fn set_timer(&self, user_id: &str, seconds: Option<u32>) -> CookingResponse {
        match seconds {
            Some(seconds) if seconds > 0 => {
                tracing::debug!(user_id = %user_id, "[Orchestrator] Timer for {}s", seconds);
                messages::timer_set(seconds)
            }
            _ => messages::missing_timer_slot(),
        }
    }

    /// Ends the user's session, if any.
    pub async fn stop(&self, user_id: &str) -> Result<CookingResponse> {
        match self.sessions.remove(user_id).await {
            Some(session) => {
                tracing::info!(
                    user_id = %user_id,
                    recipe_id = session.recipe_id,
                    "[Orchestrator] Cooking stopped"
                );
                Ok(messages::stopped(&session.recipe_title))
            }
            None => Ok(messages::nothing_in_progress()),
        }
    }
}

/// Whitespace-insensitive substring match of a spoken name against a title.
fn title_matches(title: &str, spoken: &str) -> bool {
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let spoken = squash(spoken);
    !spoken.is_empty() && squash(title).contains(&spoken)
}

fn advance(session: &CookingSession) -> (SessionChange, CookingResponse) {
    let mut next = session.clone();
    match next.advance() {
        Advance::Moved { index } => {
            let text = next.steps()[index].clone();
            let response = if session.is_started() {
                messages::step(index, &text)
            } else {
                messages::started(&text)
            };
            tracing::debug!(
                user_id = %session.user_id,
                step = index,
                "[Orchestrator] Advanced"
            );
            (SessionChange::Replace(next), response)
        }
        Advance::Finished => {
            tracing::info!(
                user_id = %session.user_id,
                recipe_id = session.recipe_id,
                "[Orchestrator] Recipe finished"
            );
            (SessionChange::Remove, messages::finished(&session.recipe_title))
        }
    }
}

fn start_transition() -> SessionMutation {
    Box::new(|current| match current {
        None => (SessionChange::Keep, messages::no_session()),
        Some(session) => match session.current_step() {
            Some((index, text)) => (SessionChange::Keep, messages::already_cooking(index, text)),
            None => advance(session),
        },
    })
}

fn next_transition() -> SessionMutation {
    Box::new(|current| match current {
        None => (SessionChange::Keep, messages::no_session()),
        Some(session) => advance(session),
    })
}

fn repeat_transition() -> SessionMutation {
    Box::new(|current| match current {
        None => (SessionChange::Keep, messages::no_session()),
        Some(session) => match session.position() {
            StepPosition::AwaitingStart => (SessionChange::Keep, messages::not_started()),
            StepPosition::OnStep(_) => match session.current_step() {
                Some((index, text)) => (SessionChange::Keep, messages::repeated(index, text)),
                None => (SessionChange::Keep, messages::not_started()),
            },
        },
    })
}
