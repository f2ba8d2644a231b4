use serde::{Deserialize, Serialize};

/// Directive for the client alongside the spoken message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Read the message aloud.
    Speak,
    /// Read the message and start a countdown of `timer_seconds`.
    TimerStart,
    /// The dish is complete; leave cooking mode.
    Finish,
}

/// A user-input outcome that is answered with a message instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rejection {
    NoSession,
    RecipeNotFound,
    NotInRecommendedList,
    CookingNotStarted,
    NothingInProgress,
    MissingSlot,
    NotUnderstood,
    NoSpeech,
}

/// HTTP-equivalent class of a rejection, for transports that need one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    NotFound,
    Conflict,
    BadRequest,
}

impl Rejection {
    pub fn status_class(&self) -> StatusClass {
        match self {
            Self::RecipeNotFound | Self::NotInRecommendedList => StatusClass::NotFound,
            Self::NoSession | Self::CookingNotStarted | Self::NothingInProgress => {
                StatusClass::Conflict
            }
            Self::MissingSlot | Self::NotUnderstood | Self::NoSpeech => StatusClass::BadRequest,
        }
    }
}

/// The orchestrator's answer to one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingResponse {
    pub message: String,
    pub action_type: ActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl CookingResponse {
    pub fn speak(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action_type: ActionType::Speak,
            timer_seconds: None,
            rejection: None,
        }
    }

    pub fn timer_start(message: impl Into<String>, seconds: u32) -> Self {
        Self {
            timer_seconds: Some(seconds),
            action_type: ActionType::TimerStart,
            ..Self::speak(message)
        }
    }

    pub fn finish(message: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::Finish,
            ..Self::speak(message)
        }
    }

    pub fn rejected(rejection: Rejection, message: impl Into<String>) -> Self {
        Self {
            rejection: Some(rejection),
            ..Self::speak(message)
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_format() {
        let json = serde_json::to_value(CookingResponse::timer_start("3분 타이머", 180)).unwrap();
        assert_eq!(json["actionType"], "TIMER_START");
        assert_eq!(json["timerSeconds"], 180);
        assert!(json.get("rejection").is_none());

        let json = serde_json::to_value(CookingResponse::rejected(
            Rejection::NotInRecommendedList,
            "없어요",
        ))
        .unwrap();
        assert_eq!(json["actionType"], "SPEAK");
        assert_eq!(json["rejection"], "NOT_IN_RECOMMENDED_LIST");
    }

    #[test]
    fn test_rejection_status_classes() {
        assert_eq!(Rejection::NoSession.status_class(), StatusClass::Conflict);
        assert_eq!(Rejection::RecipeNotFound.status_class(), StatusClass::NotFound);
        assert_eq!(Rejection::MissingSlot.status_class(), StatusClass::BadRequest);
    }
}
