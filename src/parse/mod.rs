//! Parsing of free-text model responses into structured meal plans.
//!
//! Everything in this module is lenient by design: model output is
//! heuristically formatted at best, so a missing pattern degrades to an
//! empty field or a dropped block and never to an error. Each pattern
//! lives behind a named matcher function so an upstream phrasing change
//! means editing one matcher, not re-deriving a parser.

mod grocery;
mod ingredient;
mod recipes;

pub use grocery::parse_grocery_sections;
pub use ingredient::normalize_ingredient;
pub use recipes::parse_recipes;

use crate::model::MealPlan;

const GROCERY_HEADING: &str = "grocery list";

/// Locate the first occurrence of the "grocery list" heading,
/// case-insensitively, and return its byte offset.
fn find_grocery_heading(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(GROCERY_HEADING.len())
        .position(|window| window.eq_ignore_ascii_case(GROCERY_HEADING.as_bytes()))
}

/// Split a response into its recipe portion and grocery portion.
///
/// The grocery portion starts at the first occurrence of "grocery
/// list" and includes the matched heading; if the heading is absent the
/// whole text is the recipe portion. The two halves always reconstruct
/// the input exactly.
///
/// This is a first-match split, not a structural parse: an incidental
/// earlier "grocery list" inside an instruction sentence truncates the
/// recipe portion. Accepted heuristic.
pub fn split_response(text: &str) -> (&str, &str) {
    match find_grocery_heading(text) {
        Some(idx) => (&text[..idx], &text[idx..]),
        None => (text, ""),
    }
}

/// Parse a full model response into a structured meal plan.
pub fn parse_meal_plan(text: &str) -> MealPlan {
    let (recipe_text, grocery_text) = split_response(text);

    MealPlan {
        recipes: parse_recipes(recipe_text),
        grocery_sections: parse_grocery_sections(grocery_text),
    }
}
