//! Spoken replies for cooking mode.

use fridgechef_core::cooking::{CookingResponse, Rejection};

pub fn selected(title: &str) -> CookingResponse {
    CookingResponse::speak(format!(
        "{title} 레시피를 선택했어요. 재료를 알려드릴까요, 아니면 바로 요리를 시작할까요?"
    ))
}

pub fn ingredients(title: &str, names: &[String]) -> CookingResponse {
    if names.is_empty() {
        return CookingResponse::speak(format!("{title}에 등록된 재료 정보가 없어요."));
    }
    CookingResponse::speak(format!("{title}에 필요한 재료는 {}입니다.", names.join(", ")))
}

pub fn started(step_text: &str) -> CookingResponse {
    CookingResponse::speak(format!("요리를 시작할게요. 1단계: {step_text}"))
}

pub fn step(index: usize, step_text: &str) -> CookingResponse {
    CookingResponse::speak(format!("{}단계: {step_text}", index + 1))
}

pub fn repeated(index: usize, step_text: &str) -> CookingResponse {
    CookingResponse::speak(format!("다시 알려드릴게요. {}단계: {step_text}", index + 1))
}

pub fn already_cooking(index: usize, step_text: &str) -> CookingResponse {
    CookingResponse::speak(format!(
        "이미 요리 중이에요. 지금은 {}단계: {step_text}",
        index + 1
    ))
}

pub fn finished(title: &str) -> CookingResponse {
    CookingResponse::finish(format!("{title} 완성! 맛있게 드세요."))
}

pub fn timer_set(seconds: u32) -> CookingResponse {
    CookingResponse::timer_start(
        format!("{} 타이머를 설정했어요.", spoken_duration(seconds)),
        seconds,
    )
}

pub fn stopped(title: &str) -> CookingResponse {
    CookingResponse::speak(format!("{title} 요리를 종료했어요."))
}

pub fn no_session() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::NoSession,
        "선택된 레시피가 없어요. 먼저 레시피를 골라 주세요.",
    )
}

pub fn nothing_in_progress() -> CookingResponse {
    CookingResponse::rejected(Rejection::NothingInProgress, "진행 중인 요리가 없어요.")
}

pub fn not_started() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::CookingNotStarted,
        "아직 요리를 시작하지 않았어요. '시작'이라고 말씀해 주세요.",
    )
}

pub fn recipe_not_found(name: &str) -> CookingResponse {
    CookingResponse::rejected(
        Rejection::RecipeNotFound,
        format!("'{name}' 레시피를 찾을 수 없어요."),
    )
}

pub fn not_in_recommended_list(name: &str) -> CookingResponse {
    CookingResponse::rejected(
        Rejection::NotInRecommendedList,
        format!("'{name}'은(는) 추천 목록에 없어요. 추천해 드린 레시피 중에서 골라 주세요."),
    )
}

pub fn missing_recipe_slot() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::MissingSlot,
        "어떤 레시피로 할지 다시 말씀해 주세요.",
    )
}

pub fn missing_timer_slot() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::MissingSlot,
        "타이머를 몇 분으로 맞출지 다시 말씀해 주세요.",
    )
}

pub fn not_understood() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::NotUnderstood,
        "잘 이해하지 못했어요. 다시 말씀해 주세요.",
    )
}

pub fn no_speech() -> CookingResponse {
    CookingResponse::rejected(
        Rejection::NoSpeech,
        "목소리가 들리지 않았어요. 다시 말씀해 주세요.",
    )
}

/// "3분", "1분 30초", "45초".
pub fn spoken_duration(seconds: u32) -> String {
    let (minutes, rest) = (seconds / 60, seconds % 60);
    match (minutes, rest) {
        (0, s) => format!("{s}초"),
        (m, 0) => format!("{m}분"),
        (m, s) => format!("{m}분 {s}초"),
    }
}
