//! # Ingredient Line Parser
//!
//! This module converts one free-text ingredient line into a structured
//! [`ParsedIngredient`] record. It handles quantities (integers, simple
//! fractions, hyphenated ranges), unit tokens, and bare descriptive names.
//!
//! ## Features
//!
//! - Ordered pattern matching: quantity + unit + name, then quantity +
//!   name, then name only — first match wins
//! - Fractions (`1/2`) and ranges (`2-3`, `2 - 3`) kept as text so they
//!   round-trip for display
//! - Graceful degradation: any line that matches no structured pattern
//!   becomes a name-only record; the parser never fails
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("2 cups flour");
//! assert_eq!(parsed.quantity, "2");
//! assert_eq!(parsed.unit, "cups");
//! assert_eq!(parsed.name, "flour");
//! ```

use crate::ingredient_model::ParsedIngredient;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Compiled regex patterns for the ordered line matchers
static LINE_PATTERNS: LazyLock<LinePatterns> = LazyLock::new(LinePatterns::new);

/// Unit tokens recognized in the quantity + unit + name position.
///
/// A word in unit position that is not listed here is treated as part of
/// the ingredient name, so "3 large eggs" keeps `unit: ""` rather than
/// claiming "large" as a unit.
static UNIT_TOKENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Volume
        "tsp",
        "teaspoon",
        "teaspoons",
        "tbsp",
        "tablespoon",
        "tablespoons",
        "cup",
        "cups",
        "pint",
        "pints",
        "pt",
        "quart",
        "quarts",
        "qt",
        "gallon",
        "gallons",
        "gal",
        "ml",
        "milliliter",
        "milliliters",
        "millilitre",
        "millilitres",
        "l",
        "liter",
        "liters",
        "litre",
        "litres",
        // Weight
        "oz",
        "ounce",
        "ounces",
        "lb",
        "lbs",
        "pound",
        "pounds",
        "g",
        "gram",
        "grams",
        "kg",
        "kilogram",
        "kilograms",
        // Count and container
        "dozen",
        "doz",
        "pinch",
        "pinches",
        "dash",
        "dashes",
        "clove",
        "cloves",
        "slice",
        "slices",
        "stick",
        "sticks",
        "can",
        "cans",
        "package",
        "packages",
        "pkg",
        "packet",
        "packets",
        "bag",
        "bags",
        "bottle",
        "bottles",
        "piece",
        "pieces",
    ])
});

/// The ordered line matchers, compiled once
struct LinePatterns {
    /// "2 cups flour", "1/2 teaspoon salt", "2-3 tbsp olive oil"
    quantity_unit_name: Regex,
    /// "3 large eggs" — leading integer, remainder is the name
    quantity_name: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        Self {
            quantity_unit_name: Regex::new(
                r"^(\d+(?:/\d+)?(?:\s*-\s*\d+(?:/\d+)?)?)\s+(\w+)\s+(.+)$",
            )
            .expect("quantity+unit+name pattern should be valid"),
            quantity_name: Regex::new(r"^(\d+)\s+(.+)$")
                .expect("quantity+name pattern should be valid"),
        }
    }
}

/// Parse a single free-text ingredient line.
///
/// Tries the structured patterns in order and falls back to treating the
/// whole line as a name. Never fails: empty input yields the all-empty
/// record, and any non-empty line yields at least a name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let text = line.trim();

    if text.is_empty() {
        return ParsedIngredient::empty(text);
    }

    // Pattern: quantity + unit + name. The word in unit position must be a
    // recognized unit token; otherwise it belongs to the name.
    if let Some(captures) = LINE_PATTERNS.quantity_unit_name.captures(text) {
        let unit = captures[2].to_lowercase();
        if UNIT_TOKENS.contains(unit.as_str()) {
            return ParsedIngredient {
                quantity: captures[1].trim().to_string(),
                unit,
                name: captures[3].trim().to_string(),
                original: text.to_string(),
            };
        }
    }

    // Pattern: quantity + name, no unit
    if let Some(captures) = LINE_PATTERNS.quantity_name.captures(text) {
        return ParsedIngredient {
            quantity: captures[1].to_string(),
            unit: String::new(),
            name: captures[2].trim().to_string(),
            original: text.to_string(),
        };
    }

    // Fallback: the whole line is the name
    ParsedIngredient {
        quantity: String::new(),
        unit: String::new(),
        name: text.to_string(),
        original: text.to_string(),
    }
}
