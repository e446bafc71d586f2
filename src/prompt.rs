//! Prompt composition.
//!
//! Merges user preference tags with the fixed preset set and
//! interpolates the meal and serving counts into the request template.

use crate::model::GenerationRequest;

/// The generation prompt template.
///
/// Loaded from `prompt_template.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax. Placeholders `{numMeals}` and
/// `{servingsPerMeal}` are replaced by literal substitution, first
/// occurrence only.
pub const PROMPT_TEMPLATE: &str = include_str!("prompt_template.txt");

/// Preference tags always sent with a request.
pub const PRESET_PREFERENCES: &str = "low red meat, one-pan, quick to make";

/// System message accompanying every chat-style request.
pub const SYSTEM_PROMPT: &str = "You are a helpful meal planner.";

/// Merge raw comma-separated user preferences with the preset tags.
///
/// Tokens are trimmed and lowercased; empty tokens are dropped. Preset
/// tags come first, then user tags not already in the preset set, in
/// input order.
pub fn merge_preferences(raw: &str) -> Vec<String> {
    let mut merged: Vec<String> = PRESET_PREFERENCES
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    for token in raw.split(',') {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !merged.contains(&token) {
            merged.push(token);
        }
    }

    merged
}

/// Compose the full user prompt for a generation request.
pub fn compose_prompt(request: &GenerationRequest) -> String {
    let preferences = merge_preferences(&request.preferences).join(", ");

    let body = PROMPT_TEMPLATE
        .trim_end()
        .replacen("{numMeals}", &request.num_meals.to_string(), 1)
        .replacen("{servingsPerMeal}", &request.servings_per_meal.to_string(), 1);

    format!("{} Preferences: {}", body, preferences)
}
