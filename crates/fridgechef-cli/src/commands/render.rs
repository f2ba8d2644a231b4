//! Colored terminal output for assistant replies.

use colored::Colorize;
use fridgechef_application::{ExpiringReport, Recommendation};
use fridgechef_core::cooking::{ActionType, CookingResponse};

pub fn cooking_response(response: &CookingResponse) {
    let message = if response.is_rejected() {
        response.message.yellow()
    } else {
        response.message.bright_blue()
    };
    println!("{}", message);

    match response.action_type {
        ActionType::Speak => {}
        ActionType::TimerStart => {
            if let Some(secs) = response.timer_seconds {
                println!("{}", format!("⏱  timer: {}s", secs).bright_magenta());
            }
        }
        ActionType::Finish => println!("{}", "✓ cooking finished".bright_green()),
    }
}

pub fn recommendation(result: &Recommendation) {
    if !result.suggested_ingredients.is_empty() {
        println!(
            "{}",
            format!("Ingredients considered: {}", result.suggested_ingredients.join(", "))
                .bright_black()
        );
    }
    if !result.matching_ingredients.is_empty() {
        println!(
            "{}",
            format!("In your fridge: {}", result.matching_ingredients.join(", ")).bright_black()
        );
    }

    if result.recipes.is_empty() {
        println!("{}", "추천할 레시피를 찾지 못했어요.".yellow());
        return;
    }
    for (rank, recipe) in result.recipes.iter().enumerate() {
        let mut details = Vec::new();
        if let Some(minutes) = recipe.cook_time_minutes {
            details.push(format!("{}분", minutes));
        }
        if let Some(price) = recipe.estimated_price {
            details.push(format!("{}원", price));
        }
        if let Some(calories) = recipe.calories {
            details.push(format!("{}kcal", calories));
        }
        let details = if details.is_empty() {
            String::new()
        } else {
            format!(" ({})", details.join(", "))
        };
        println!(
            "{} {}{}",
            format!("{:>2}.", rank + 1).bright_black(),
            recipe.title.bright_blue().bold(),
            details.bright_black()
        );
    }
}

pub fn expiring(report: &ExpiringReport) {
    println!("{}", report.message.bright_blue());
}
