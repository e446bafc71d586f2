//! Recipe block parsing.
//!
//! The recipe portion of a response is conventionally a sequence of
//! markdown-like blocks separated by horizontal rules, each headed by a
//! `###` line with a bold title. None of that is guaranteed, so every
//! matcher returns an `Option` and unusable blocks are dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Recipe;

const DEFAULT_SERVINGS: u32 = 2;

/// Horizontal-rule block separator: a run of three or more hyphens.
static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").unwrap());

/// First `###` heading line of a block.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###(.*)$").unwrap());

/// First bold span inside a heading line.
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Leading `<number>. ` ordinal prefix on a title or instruction.
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());

/// Bold `Description:` label, capturing the rest of its line.
static DESCRIPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*description:?\*\*:?[ \t]*([^\n]*)").unwrap());

/// Bold `Ingredients:` label.
static INGREDIENTS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*ingredients:?\*\*:?").unwrap());

/// Bold `Instructions:` label.
static INSTRUCTIONS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*instructions:?\*\*:?").unwrap());

/// Leading bullet markers and whitespace on an ingredient line.
static LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s*•-]+").unwrap());

/// Numbered-step boundary: newline followed by `<digits>. `.
static STEP_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\d+\.\s+").unwrap());

/// `serves <N>` / `serving(s) <N>` anywhere in the block.
static SERVINGS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:serves|servings?)[:\s]*([0-9]+)").unwrap());

/// Extract the title from a block's first `###` heading line: the text
/// of the first bold span, with any leading ordinal stripped.
fn match_title(block: &str) -> Option<String> {
    let heading = HEADING_LINE.captures(block)?.get(1)?.as_str();
    let bold = BOLD_SPAN.captures(heading)?.get(1)?.as_str();
    let title = ORDINAL_PREFIX.replace(bold, "").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn match_description(block: &str) -> Option<String> {
    DESCRIPTION_LABEL
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Ingredient lines between the `Ingredients:` and `Instructions:`
/// labels (or block end when the latter is missing).
fn match_ingredients(block: &str) -> Vec<String> {
    let start = match INGREDIENTS_LABEL.find(block) {
        Some(m) => m.end(),
        None => return Vec::new(),
    };
    let end = INSTRUCTIONS_LABEL
        .find_at(block, start)
        .map(|m| m.start())
        .unwrap_or(block.len());

    block[start..end]
        .lines()
        .map(|line| LEADING_BULLET.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Instruction steps after the `Instructions:` label, split on the
/// numbered-list pattern with ordinals stripped.
fn match_instructions(block: &str) -> Vec<String> {
    let start = match INSTRUCTIONS_LABEL.find(block) {
        Some(m) => m.end(),
        None => return Vec::new(),
    };

    STEP_BOUNDARY
        .split(&block[start..])
        .map(|step| ORDINAL_PREFIX.replace(step, "").trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

fn match_servings(block: &str) -> Option<u32> {
    SERVINGS_PATTERN
        .captures(block)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse the recipe portion of a response into structured recipes.
///
/// Blocks without a `###` heading, blocks whose title mentions the
/// consolidated grocery summary, and blocks with no usable title or
/// ingredients are dropped silently. Never fails on malformed input.
pub fn parse_recipes(text: &str) -> Vec<Recipe> {
    let mut recipes = Vec::new();

    for block in BLOCK_SEPARATOR.split(text) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let title = match match_title(block) {
            Some(title) => title,
            None => continue,
        };
        // The preamble/summary block is not a recipe.
        if title.to_lowercase().contains("consolidated") {
            continue;
        }

        let ingredients = match_ingredients(block);
        if ingredients.is_empty() {
            continue;
        }

        let servings = match_servings(block).unwrap_or(DEFAULT_SERVINGS);

        recipes.push(Recipe {
            id: recipes.len(),
            title,
            description: match_description(block).unwrap_or_default(),
            ingredients,
            instructions: match_instructions(block),
            servings,
            current_servings: servings,
            expanded: false,
            checked: true,
        });
    }

    recipes
}
