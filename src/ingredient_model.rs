//! # Ingredient and Shopping-Item Data Model
//!
//! This module defines the data structures exchanged between the ingredient
//! line parser, the aggregation engine, and the surrounding application.
//!
//! ## Core Concepts
//!
//! - **Recipe**: the input record — an id, a display title, and free-text
//!   ingredient lines as authored by the recipe's creator
//! - **ParsedIngredient**: the `{quantity, unit, name, original}`
//!   decomposition of one ingredient line
//! - **SourceTaggedIngredient**: a parsed line tagged with the recipe it
//!   came from
//! - **AggregatedShoppingItem**: a consolidated shopping-list entry with
//!   provenance (which recipes contributed to it)
//!
//! Quantities stay as text (`"2"`, `"1/2"`, `"2-3"`) rather than a numeric
//! type so that fractions and ranges round-trip for display. Only the
//! aggregator's combination routine interprets them numerically.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_model::Recipe;
//!
//! let recipe = Recipe::new("r1", "Pancakes", vec![
//!     "2 cups flour".to_string(),
//!     "3 large eggs".to_string(),
//! ]);
//! assert_eq!(recipe.ingredients.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A recipe as supplied by the surrounding application.
///
/// Only the fields the aggregation core needs are modeled. The
/// `ingredients` field deserializes leniently: a missing field, a non-array
/// value, or non-string elements all degrade to zero ingredient lines
/// instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned by whatever loaded the recipe
    pub id: String,

    /// Display title, recorded as provenance on aggregated items
    pub title: String,

    /// Free-text ingredient lines, one per ingredient
    #[serde(default, deserialize_with = "lenient_ingredient_lines")]
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe record
    pub fn new(id: &str, title: &str, ingredients: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            ingredients,
        }
    }
}

/// Accept only an array of strings for `ingredients`; anything else counts
/// as zero lines.
fn lenient_ingredient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let lines = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(line) => Some(line),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(lines)
}

/// The structured decomposition of a single free-text ingredient line.
///
/// Produced by [`crate::ingredient_parser::parse_ingredient`]. All fields
/// are plain text; empty strings mean "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Numeric or fractional text (`"2"`, `"1/2"`, `"2-3"`), `""` if absent
    pub quantity: String,

    /// Lowercased unit token (`"cups"`, `"teaspoon"`), `""` if absent
    pub unit: String,

    /// The remaining descriptive text (`"flour"`, `"large eggs"`)
    pub name: String,

    /// The trimmed input line, kept as the source of truth for display
    pub original: String,
}

impl ParsedIngredient {
    /// The all-empty record returned for inputs with no content
    pub fn empty(original: &str) -> Self {
        Self {
            quantity: String::new(),
            unit: String::new(),
            name: String::new(),
            original: original.to_string(),
        }
    }

    /// Check whether a quantity was recognized
    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }

    /// Check whether a unit was recognized
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item_fields(f, &self.quantity, &self.unit, &self.name)
    }
}

/// A parsed ingredient line tagged with the recipe that contributed it.
///
/// Created once per line while aggregating across recipes; ephemeral within
/// a single aggregation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTaggedIngredient {
    /// The parsed line
    #[serde(flatten)]
    pub parsed: ParsedIngredient,

    /// Id of the recipe this line came from
    pub source_recipe_id: String,

    /// Title of the recipe this line came from
    pub source_recipe_name: String,
}

impl SourceTaggedIngredient {
    /// Tag a parsed line with its source recipe
    pub fn new(parsed: ParsedIngredient, recipe: &Recipe) -> Self {
        Self {
            parsed,
            source_recipe_id: recipe.id.clone(),
            source_recipe_name: recipe.title.clone(),
        }
    }
}

/// One consolidated shopping-list entry.
///
/// Carries the (possibly combined) quantity plus parallel provenance
/// vectors listing every contributing recipe in first-contribution order.
/// Duplicates are allowed: a recipe that contributes twice appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedShoppingItem {
    /// Combined quantity text, or the single contributor's quantity
    pub quantity: String,

    /// Lowercased unit token shared by every merged contribution
    pub unit: String,

    /// Descriptive name from the first contribution
    pub name: String,

    /// Original line of the first contribution
    pub original: String,

    /// Ids of contributing recipes, in contribution order
    pub source_recipe_ids: Vec<String>,

    /// Titles of contributing recipes, parallel to `source_recipe_ids`
    pub source_recipe_names: Vec<String>,
}

impl AggregatedShoppingItem {
    /// Start a new entry from a single tagged contribution
    pub fn from_tagged(tagged: &SourceTaggedIngredient) -> Self {
        Self {
            quantity: tagged.parsed.quantity.clone(),
            unit: tagged.parsed.unit.clone(),
            name: tagged.parsed.name.clone(),
            original: tagged.parsed.original.clone(),
            source_recipe_ids: vec![tagged.source_recipe_id.clone()],
            source_recipe_names: vec![tagged.source_recipe_name.clone()],
        }
    }

    /// Fold another contribution into this entry with an already-combined
    /// quantity
    pub fn record_contribution(
        &mut self,
        combined_quantity: String,
        tagged: &SourceTaggedIngredient,
    ) {
        self.quantity = combined_quantity;
        self.source_recipe_ids.push(tagged.source_recipe_id.clone());
        self.source_recipe_names
            .push(tagged.source_recipe_name.clone());
    }

    /// Comma-joined titles of the contributing recipes
    pub fn source_summary(&self) -> String {
        self.source_recipe_names.join(", ")
    }
}

impl fmt::Display for AggregatedShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item_fields(f, &self.quantity, &self.unit, &self.name)
    }
}

/// Shared "quantity unit name" rendering, skipping empty fields
pub(crate) fn write_item_fields(
    f: &mut fmt::Formatter<'_>,
    quantity: &str,
    unit: &str,
    name: &str,
) -> fmt::Result {
    let mut wrote = false;
    for field in [quantity, unit, name] {
        if field.is_empty() {
            continue;
        }
        if wrote {
            write!(f, " ")?;
        }
        write!(f, "{}", field)?;
        wrote = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_ingredient_array() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "r1", "title": "Pasta", "ingredients": ["2 cups flour", "1 cup sugar"]}"#,
        )
        .unwrap();

        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_recipe_missing_ingredients_is_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": "r1", "title": "Pasta"}"#).unwrap();

        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_non_array_ingredients_is_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "r1", "title": "Pasta", "ingredients": "2 cups flour"}"#,
        )
        .unwrap();

        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_skips_non_string_lines() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "r1", "title": "Pasta", "ingredients": ["2 cups flour", 42, null]}"#,
        )
        .unwrap();

        assert_eq!(recipe.ingredients, vec!["2 cups flour".to_string()]);
    }

    #[test]
    fn test_parsed_ingredient_display_skips_empty_fields() {
        let parsed = ParsedIngredient {
            quantity: "2".to_string(),
            unit: "cups".to_string(),
            name: "flour".to_string(),
            original: "2 cups flour".to_string(),
        };
        assert_eq!(parsed.to_string(), "2 cups flour");

        let no_unit = ParsedIngredient {
            quantity: "3".to_string(),
            unit: String::new(),
            name: "large eggs".to_string(),
            original: "3 large eggs".to_string(),
        };
        assert_eq!(no_unit.to_string(), "3 large eggs");

        let name_only = ParsedIngredient {
            quantity: String::new(),
            unit: String::new(),
            name: "salt to taste".to_string(),
            original: "salt to taste".to_string(),
        };
        assert_eq!(name_only.to_string(), "salt to taste");
    }

    #[test]
    fn test_aggregated_item_provenance_accumulation() {
        let pasta = Recipe::new("r1", "Pasta", vec![]);
        let cake = Recipe::new("r2", "Cake", vec![]);

        let first = SourceTaggedIngredient::new(
            ParsedIngredient {
                quantity: "2".to_string(),
                unit: "cups".to_string(),
                name: "flour".to_string(),
                original: "2 cups flour".to_string(),
            },
            &pasta,
        );
        let second = SourceTaggedIngredient::new(
            ParsedIngredient {
                quantity: "1".to_string(),
                unit: "cups".to_string(),
                name: "flour".to_string(),
                original: "1 cups flour".to_string(),
            },
            &cake,
        );

        let mut item = AggregatedShoppingItem::from_tagged(&first);
        assert_eq!(item.source_recipe_ids, vec!["r1".to_string()]);

        item.record_contribution("3".to_string(), &second);
        assert_eq!(item.quantity, "3");
        assert_eq!(
            item.source_recipe_ids,
            vec!["r1".to_string(), "r2".to_string()]
        );
        assert_eq!(item.source_summary(), "Pasta, Cake");
    }
}
