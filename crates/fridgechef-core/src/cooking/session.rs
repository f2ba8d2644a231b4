use super::steps::split_into_steps;
use crate::recipe::{Recipe, RecipeId};

/// Where a session is in its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPosition {
    /// Recipe selected, cooking not started yet.
    AwaitingStart,
    /// On step `i` (zero-based). Always `< steps.len()`.
    OnStep(usize),
}

/// Result of moving a session forward by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved { index: usize },
    /// The last step was already current; the session is over.
    Finished,
}

/// Ephemeral guided-cooking state for one user.
///
/// The step list is a snapshot taken when the recipe was selected; later
/// edits to the catalog do not affect a session in flight. Sessions are only
/// built through [`CookingSession::from_recipe`] and moved by
/// [`CookingSession::advance`], so the position always points at a real step.
#[derive(Debug, Clone, PartialEq)]
pub struct CookingSession {
    pub user_id: String,
    pub recipe_id: RecipeId,
    pub recipe_title: String,
    steps: Vec<String>,
    position: StepPosition,
}

impl CookingSession {
    /// Creates a session for a freshly selected recipe, awaiting start.
    pub fn from_recipe(user_id: impl Into<String>, recipe: &Recipe) -> Self {
        Self {
            user_id: user_id.into(),
            recipe_id: recipe.id,
            recipe_title: recipe.title.clone(),
            steps: split_into_steps(&recipe.instructions),
            position: StepPosition::AwaitingStart,
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn position(&self) -> StepPosition {
        self.position
    }

    /// Step pointer in the classic encoding: `-1` before start, else the step index.
    pub fn current_step_index(&self) -> isize {
        match self.position {
            StepPosition::AwaitingStart => -1,
            StepPosition::OnStep(index) => index as isize,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.position, StepPosition::OnStep(_))
    }

    /// The current step text, if cooking has started.
    pub fn current_step(&self) -> Option<(usize, &str)> {
        match self.position {
            StepPosition::AwaitingStart => None,
            StepPosition::OnStep(index) => self.steps.get(index).map(|s| (index, s.as_str())),
        }
    }

    /// Moves to the next step, or reports that the recipe is done.
    ///
    /// On `Finished` the position is left untouched; the caller is expected to
    /// discard the session.
    pub fn advance(&mut self) -> Advance {
        let next = match self.position {
            StepPosition::AwaitingStart => 0,
            StepPosition::OnStep(index) => index + 1,
        };
        if next < self.steps.len() {
            self.position = StepPosition::OnStep(next);
            Advance::Moved { index: next }
        } else {
            Advance::Finished
        }
    }
}
