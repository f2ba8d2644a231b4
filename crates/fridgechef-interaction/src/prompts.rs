//! System prompts for the understanding agent, rendered with minijinja.

use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::understanding::CookingIntent;
use minijinja::{Environment, context};

const CLASSIFY_TEMPLATE: &str = r#"You are the voice command classifier of a cooking assistant.
The user is cooking and speaks Korean. Classify the utterance into exactly one intent:
{% for intent in intents %}- {{ intent.label }}: {{ intent.meaning }}
{% endfor %}
Reply with a JSON object only:
{"intent": "<LABEL>", "timerSeconds": <integer or null>, "recipeName": <string or null>, "recipeId": <integer or null>}
- timerSeconds: the requested duration in seconds, only for TIMER ("3분" is 180).
- recipeName: the dish the user chose, only for SELECT.
- recipeId: only when the user names a numeric recipe id.
If nothing fits, use "UNKNOWN"."#;

const CONDITIONS_TEMPLATE: &str = r#"You extract recipe recommendation conditions from a Korean request.
Reply with a JSON object only, using these keys:
- useExpiringIngredients (boolean): the user wants to use up ingredients that expire soon.
- tastePreference (string or null): a taste such as "매운" or "담백한".
- mustUseIngredients (array of strings): ingredients the user insists on.
- timeLimitMinutes (integer or null): the longest cooking time acceptable.
- missingIngredient (string or null): an ingredient the user says they do not have.
- substituteIngredients (array of strings): up to {{ max_substitutes }} common substitutes for missingIngredient, empty when nothing is missing.
- maxPrice (integer or null): the highest acceptable cost in won.
- maxCalories (integer or null): the highest acceptable calories.
Use ingredient names in Korean as they would appear in a recipe."#;

const INTENT_MEANINGS: [(CookingIntent, &str); 7] = [
    (CookingIntent::Select, "choose a recipe to cook"),
    (CookingIntent::Ingredients, "ask for the ingredient list"),
    (CookingIntent::StartCooking, "start cooking from the first step"),
    (CookingIntent::Next, "go to the next step"),
    (CookingIntent::Previous, "hear the current step again"),
    (CookingIntent::Timer, "set a timer"),
    (CookingIntent::Stop, "stop cooking"),
];

/// Prompt templates, compiled once per agent.
pub struct PromptSet {
    env: Environment<'static>,
}

impl PromptSet {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("classify", CLASSIFY_TEMPLATE)
            .map_err(template_error)?;
        env.add_template("conditions", CONDITIONS_TEMPLATE)
            .map_err(template_error)?;
        Ok(Self { env })
    }

    pub fn classify_system_prompt(&self) -> Result<String> {
        let intents: Vec<_> = INTENT_MEANINGS
            .iter()
            .map(|(intent, meaning)| context! { label => intent.to_string(), meaning => meaning })
            .collect();
        self.env
            .get_template("classify")
            .and_then(|template| template.render(context! { intents => intents }))
            .map_err(template_error)
    }

    pub fn conditions_system_prompt(&self) -> Result<String> {
        self.env
            .get_template("conditions")
            .and_then(|template| template.render(context! { max_substitutes => 3 }))
            .map_err(template_error)
    }
}

fn template_error(err: minijinja::Error) -> FridgeError {
    FridgeError::internal(format!("Prompt template error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prompt_lists_every_intent() {
        let prompt = PromptSet::new().unwrap().classify_system_prompt().unwrap();
        for label in ["SELECT", "INGREDIENTS", "START_COOKING", "NEXT", "PREVIOUS", "TIMER", "STOP"] {
            assert!(prompt.contains(&format!("- {label}:")), "missing {label}");
        }
        assert!(prompt.contains("UNKNOWN"));
    }

    #[test]
    fn test_conditions_prompt_renders_limit() {
        let prompt = PromptSet::new().unwrap().conditions_system_prompt().unwrap();
        assert!(prompt.contains("up to 3 common substitutes"));
        assert!(prompt.contains("substituteIngredients"));
    }
}
