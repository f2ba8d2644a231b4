//! OpenAiUnderstandingAgent - Chat Completions based language understanding.
//!
//! Both operations send one system prompt plus the user's utterance and ask
//! for a JSON object back (`response_format: json_object`).

use crate::http::{endpoint, ensure_success, request_failed};
use crate::prompts::PromptSet;
use async_trait::async_trait;
use fridgechef_core::config::OpenAiConfig;
use fridgechef_core::error::{FridgeError, Result};
use fridgechef_core::recipe::RecipeId;
use fridgechef_core::understanding::{
    ClassifiedIntent, CookingIntent, LanguageUnderstanding, RecommendationConditions,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SERVICE: &str = "understanding";

/// Language understanding over an OpenAI-compatible Chat Completions endpoint.
pub struct OpenAiUnderstandingAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    prompts: PromptSet,
}

impl OpenAiUnderstandingAgent {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: fridgechef_core::config::DEFAULT_OPENAI_BASE_URL.to_string(),
            prompts: PromptSet::new()?,
        })
    }

    /// Builds the agent from the `[openai]` config section.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            FridgeError::config(
                "OpenAI API key not found in config.toml or OPENAI_API_KEY".to_string(),
            )
        })?;
        Ok(Self::new(api_key, config.model.clone())?.with_base_url(config.base_url.clone()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn complete_json(&self, system_prompt: String, text: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.0,
        };

        let response = self
            .client
            .post(endpoint(&self.base_url, "chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| request_failed(SERVICE, err))?;
        let response = ensure_success(SERVICE, response).await?;

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            FridgeError::collaborator(SERVICE, format!("Failed to parse OpenAI response: {err}"))
        })?;
        extract_text_response(parsed)
    }
}

#[async_trait]
impl LanguageUnderstanding for OpenAiUnderstandingAgent {
    async fn classify_cooking_intent(&self, text: &str) -> Result<ClassifiedIntent> {
        let prompt = self.prompts.classify_system_prompt()?;
        let reply = self.complete_json(prompt, text).await?;
        let intent = parse_intent_reply(&reply)?;
        tracing::debug!("[Understanding] '{}' -> {:?}", text, intent);
        Ok(intent)
    }

    async fn extract_recommendation_conditions(
        &self,
        text: &str,
    ) -> Result<RecommendationConditions> {
        let prompt = self.prompts.conditions_system_prompt()?;
        let reply = self.complete_json(prompt, text).await?;
        let conditions = parse_conditions_reply(&reply)?;
        tracing::debug!("[Understanding] '{}' -> {:?}", text, conditions);
        Ok(conditions)
    }
}

/// Classifier reply before the label is mapped onto [`CookingIntent`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntentReply {
    #[serde(default)]
    intent: String,
    #[serde(default)]
    timer_seconds: Option<i64>,
    #[serde(default)]
    recipe_name: Option<String>,
    #[serde(default)]
    recipe_id: Option<RecipeId>,
}

fn parse_intent_reply(reply: &str) -> Result<ClassifiedIntent> {
    let raw: IntentReply = serde_json::from_str(reply).map_err(|err| {
        FridgeError::collaborator(SERVICE, format!("Malformed intent reply: {err}"))
    })?;

    let intent = CookingIntent::parse_lenient(&raw.intent);
    if intent == CookingIntent::Unknown && !raw.intent.trim().is_empty() {
        tracing::debug!("[Understanding] Unrecognised intent label '{}'", raw.intent);
    }

    Ok(ClassifiedIntent {
        intent,
        timer_seconds: raw
            .timer_seconds
            .filter(|secs| *secs > 0)
            .and_then(|secs| u32::try_from(secs).ok()),
        recipe_name: raw
            .recipe_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()),
        recipe_id: raw.recipe_id,
    })
}

/// Extraction reply with every field kept as raw JSON.
///
/// Constraints are optional narrowing hints, so a malformed one is dropped
/// on its own instead of failing the whole reply.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ConditionsReply {
    use_expiring_ingredients: Value,
    taste_preference: Value,
    must_use_ingredients: Value,
    time_limit_minutes: Value,
    missing_ingredient: Value,
    substitute_ingredients: Value,
    max_price: Value,
    max_calories: Value,
}

fn parse_conditions_reply(reply: &str) -> Result<RecommendationConditions> {
    let raw: ConditionsReply = serde_json::from_str(reply).map_err(|err| {
        FridgeError::collaborator(SERVICE, format!("Malformed conditions reply: {err}"))
    })?;

    Ok(RecommendationConditions {
        use_expiring_ingredients: lenient_flag(&raw.use_expiring_ingredients),
        taste_preference: lenient_text(&raw.taste_preference),
        must_use_ingredients: lenient_names(&raw.must_use_ingredients),
        time_limit_minutes: lenient_limit("timeLimitMinutes", &raw.time_limit_minutes),
        missing_ingredient: lenient_text(&raw.missing_ingredient),
        substitute_ingredients: lenient_names(&raw.substitute_ingredients),
        max_price: lenient_limit("maxPrice", &raw.max_price),
        max_calories: lenient_limit("maxCalories", &raw.max_calories),
    })
}

fn lenient_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn lenient_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn lenient_names(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(lenient_text).collect(),
        Value::String(_) => lenient_text(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// A positive whole limit; fractions are rounded, anything else is ignored.
fn lenient_limit(field: &str, value: &Value) -> Option<u32> {
    let number = match value {
        Value::Null => return None,
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    let limit = number
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n.round().min(f64::from(u32::MAX)) as u32);
    if limit.is_none() {
        tracing::debug!("[Understanding] Ignoring {} = {}", field, value);
    }
    limit
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            FridgeError::collaborator(SERVICE, "OpenAI API returned no content in the response")
        })
}
