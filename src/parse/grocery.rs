//! Grocery list parsing.
//!
//! The grocery portion groups `- ` items under bold section headers
//! such as `**Produce:**`. Lines matching neither pattern are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::GrocerySection;

/// Bold section header alone on its line, e.g. `**Spices & Pantry:**`.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([A-Za-z()& ]+):\*\*$").unwrap());

/// Parse the grocery portion of a response into named sections.
///
/// A header line starts a new section and flushes the previous one;
/// sections with zero items are never emitted. Section order is the
/// order headers first appeared.
pub fn parse_grocery_sections(text: &str) -> Vec<GrocerySection> {
    let mut sections = Vec::new();
    let mut current: Option<GrocerySection> = None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(caps) = SECTION_HEADER.captures(line) {
            flush(&mut sections, current.take());
            current = Some(GrocerySection {
                name: caps[1].trim().to_string(),
                items: Vec::new(),
            });
        } else if let Some(item) = line.strip_prefix("- ") {
            if let Some(section) = current.as_mut() {
                let item = item.trim();
                if !item.is_empty() {
                    section.items.push(item.to_string());
                }
            }
        }
        // Anything else (the heading itself, blank lines, prose) is ignored.
    }

    flush(&mut sections, current);
    sections
}

fn flush(sections: &mut Vec<GrocerySection>, section: Option<GrocerySection>) {
    if let Some(section) = section {
        if !section.items.is_empty() {
            sections.push(section);
        }
    }
}
