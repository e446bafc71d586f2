//! Ingredient normalization.
//!
//! Reduces an ingredient line like "2 cups fresh diced tomatoes
//! (optional)" to a comparable key ("tomatoes") so the same ingredient
//! can be matched across recipes. The reduction is lossy on purpose:
//! plural/singular mismatches and synonyms still produce different
//! keys, so callers must not assume exact recall.

use std::sync::LazyLock;

use regex::Regex;

/// Leading quantity/unit prefix: digits, spaces, slashes, periods,
/// commas, hyphens.
static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s/.,-]+").unwrap());

/// Parenthesized asides, e.g. "(optional)" or "(about 2 cups)".
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Stop phrases removed as whole units before word filtering.
static STOP_PHRASES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:as needed|as desired|as required)\b").unwrap());

/// Units and descriptors that carry no identity.
const STOP_WORDS: &[&str] = &[
    "of", "and", "or", "to", "for", "with", "optional", "fresh", "small", "medium", "large", "can",
    "oz", "cup", "cups", "tbsp", "tsp", "cloves", "bunch", "slices", "slice", "pieces", "piece",
    "trimmed", "diced", "minced", "rinsed", "peeled", "deveined", "zest", "juice", "sliced",
    "thinly", "drained", "plus", "more",
];

/// Normalize an ingredient line to a comparison key.
///
/// Pure, deterministic and idempotent: running it on its own output
/// yields the same string.
pub fn normalize_ingredient(line: &str) -> String {
    let stripped = LEADING_QUANTITY.replace(line, "");
    let stripped = PARENTHESIZED.replace_all(&stripped, "");

    let lowered: String = stripped
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect::<String>()
        .to_lowercase();

    let without_phrases = STOP_PHRASES.replace_all(&lowered, "");

    without_phrases
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quantity_unit_and_descriptors() {
        assert_eq!(
            normalize_ingredient("2 cups fresh diced tomatoes (optional)"),
            "tomatoes"
        );
    }

    #[test]
    fn test_strips_leading_fraction() {
        assert_eq!(normalize_ingredient("1/2 cup olive oil"), "olive oil");
    }

    #[test]
    fn test_strips_parenthesized_aside() {
        assert_eq!(
            normalize_ingredient("1 can (15 oz) black beans, rinsed and drained"),
            "black beans"
        );
    }

    #[test]
    fn test_removes_stop_phrases() {
        assert_eq!(normalize_ingredient("salt as needed"), "salt");
        assert_eq!(normalize_ingredient("cilantro, as desired"), "cilantro");
    }

    #[test]
    fn test_keeps_multi_word_items() {
        assert_eq!(
            normalize_ingredient("3 cloves garlic, minced"),
            "garlic"
        );
        assert_eq!(
            normalize_ingredient("1 lb boneless chicken thighs"),
            "lb boneless chicken thighs"
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "2 cups fresh diced tomatoes (optional)",
            "1 can (15 oz) black beans, rinsed and drained",
            "juice of 1 lemon",
            "salt and pepper to taste",
        ];
        for input in inputs {
            let once = normalize_ingredient(input);
            assert_eq!(normalize_ingredient(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_empty_and_numeric_only_input() {
        assert_eq!(normalize_ingredient(""), "");
        assert_eq!(normalize_ingredient("1 1/2"), "");
    }

    #[test]
    fn test_does_not_unify_plurals() {
        // Documented limitation, not a bug.
        assert_ne!(normalize_ingredient("tomato"), normalize_ingredient("tomatoes"));
    }
}
