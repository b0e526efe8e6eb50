//! # Ingredient Aggregation Engine
//!
//! Folds the ingredient lines of one or more recipes into a consolidated
//! shopping list. Lines that denote the same shopping item (same
//! name-equivalence class, same unit) are merged into a single entry with
//! a combined quantity and accumulated provenance.
//!
//! Quantity arithmetic is kitchen-grade, not exact rational arithmetic:
//! whole sums render as integers, common fractional remainders render as
//! fractions, and anything else falls back to one decimal place.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::aggregator::aggregate_ingredients;
//! use shopping_list::ingredient_model::Recipe;
//!
//! let recipes = vec![
//!     Recipe::new("r1", "Pasta", vec!["2 cups flour".to_string()]),
//!     Recipe::new("r2", "Cake", vec!["1 cup flour".to_string()]),
//! ];
//!
//! let items = aggregate_ingredients(&recipes);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].quantity, "3");
//! ```

use crate::ingredient_matching::are_ingredients_same;
use crate::ingredient_model::{AggregatedShoppingItem, Recipe, SourceTaggedIngredient};
use crate::ingredient_parser::parse_ingredient;
use log::{debug, trace};

/// Aggregate the ingredient lines of `recipes` into shopping-list entries.
///
/// Every line is parsed and tagged with its source recipe (recipe order,
/// then in-recipe line order), then folded left to right into the output:
/// a line merges into an existing entry when the names are equivalent, the
/// units match (plural-insensitive, never cross-converted), and both
/// quantities combine numerically. A failed combination keeps both lines
/// as separate entries rather than dropping a quantity. Output order is
/// first-encounter order.
pub fn aggregate_ingredients(recipes: &[Recipe]) -> Vec<AggregatedShoppingItem> {
    debug!("aggregating ingredients from {} recipes", recipes.len());

    let mut tagged_lines = Vec::new();
    for recipe in recipes {
        for line in &recipe.ingredients {
            let parsed = parse_ingredient(line);
            tagged_lines.push(SourceTaggedIngredient::new(parsed, recipe));
        }
    }

    let mut aggregated: Vec<AggregatedShoppingItem> = Vec::new();

    for tagged in &tagged_lines {
        let matched = aggregated.iter().position(|item| {
            are_ingredients_same(&item.name, &tagged.parsed.name)
                && same_unit(&item.unit, &tagged.parsed.unit)
        });

        match matched {
            Some(index) => {
                match combine_quantities(&aggregated[index].quantity, &tagged.parsed.quantity) {
                    Some(combined) => {
                        trace!(
                            "merged '{}' into '{}' ({})",
                            tagged.parsed.original,
                            aggregated[index].name,
                            combined
                        );
                        aggregated[index].record_contribution(combined, tagged);
                    }
                    None => {
                        // Quantities cannot combine; keep both lines visible
                        trace!(
                            "quantities for '{}' do not combine, keeping separate entry",
                            tagged.parsed.name
                        );
                        aggregated.push(AggregatedShoppingItem::from_tagged(tagged));
                    }
                }
            }
            None => aggregated.push(AggregatedShoppingItem::from_tagged(tagged)),
        }
    }

    debug!(
        "aggregated {} lines into {} items",
        tagged_lines.len(),
        aggregated.len()
    );

    aggregated
}

/// Combine two quantity strings by numeric addition.
///
/// Returns `None` when either side is empty or is not a plain number or a
/// simple `a/b` fraction — ranges like `"2-3"` and free text never
/// combine. The sum renders as an integer when whole, as `"W F"`/`"F"`
/// when the remainder matches a common kitchen fraction, and to one
/// decimal place otherwise.
pub fn combine_quantities(q1: &str, q2: &str) -> Option<String> {
    if q1.is_empty() || q2.is_empty() {
        return None;
    }

    let total = parse_quantity_value(q1)? + parse_quantity_value(q2)?;
    Some(render_quantity(total))
}

/// Unit tokens match when equal outright or equal after dropping a plural
/// `s` ("cup" and "cups" are the same unit; "cup" and "tbsp" are not).
/// Units are never cross-converted.
fn same_unit(a: &str, b: &str) -> bool {
    a == b || singular(a) == singular(b)
}

fn singular(unit: &str) -> &str {
    if unit.ends_with('s') && unit.len() > 1 {
        &unit[..unit.len() - 1]
    } else {
        unit
    }
}

/// Interpret a quantity string as a number; `None` when it is not a plain
/// number or simple fraction
fn parse_quantity_value(text: &str) -> Option<f64> {
    let text = text.trim();

    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator: f64 = numerator.trim().parse().ok()?;
        let denominator: f64 = denominator.trim().parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    text.parse().ok()
}

/// Render a combined quantity back to display text
fn render_quantity(total: f64) -> String {
    if total.fract() == 0.0 {
        return format!("{}", total as i64);
    }

    let whole = total.floor() as i64;
    let remainder_hundredths = ((total - total.floor()) * 100.0).round() as i64;

    let fraction = match remainder_hundredths {
        25 => Some("1/4"),
        50 => Some("1/2"),
        75 => Some("3/4"),
        33 => Some("1/3"),
        67 => Some("2/3"),
        _ => None,
    };

    match fraction {
        Some(fraction) if whole > 0 => format!("{} {}", whole, fraction),
        Some(fraction) => fraction.to_string(),
        None => format!("{:.1}", total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_whole_numbers() {
        assert_eq!(combine_quantities("2", "1"), Some("3".to_string()));
        assert_eq!(combine_quantities("1", "1"), Some("2".to_string()));
    }

    #[test]
    fn test_combine_fractions() {
        assert_eq!(combine_quantities("1/2", "1/2"), Some("1".to_string()));
        assert_eq!(combine_quantities("1/4", "1/4"), Some("1/2".to_string()));
        assert_eq!(combine_quantities("1", "1/2"), Some("1 1/2".to_string()));
        assert_eq!(combine_quantities("1/3", "1/3"), Some("2/3".to_string()));
    }

    #[test]
    fn test_combine_decimal_inputs() {
        assert_eq!(combine_quantities("1.5", "1"), Some("2 1/2".to_string()));
        assert_eq!(combine_quantities("0.25", "1"), Some("1 1/4".to_string()));
    }

    #[test]
    fn test_combine_falls_back_to_one_decimal() {
        // 1/4 + 1/8 = 0.375, which matches no table fraction
        assert_eq!(combine_quantities("1/4", "1/8"), Some("0.4".to_string()));
        assert_eq!(combine_quantities("1.2", "1.1"), Some("2.3".to_string()));
    }

    #[test]
    fn test_combine_rejects_empty_or_unparseable() {
        assert_eq!(combine_quantities("", "1"), None);
        assert_eq!(combine_quantities("1", ""), None);
        assert_eq!(combine_quantities("a pinch", "1"), None);
        assert_eq!(combine_quantities("2-3", "1"), None);
        assert_eq!(combine_quantities("1/0", "1"), None);
    }

    #[test]
    fn test_aggregate_merges_across_recipes() {
        let recipes = vec![
            Recipe::new(
                "recipe1",
                "Pasta Recipe",
                vec!["2 cups flour".to_string(), "1 cup sugar".to_string()],
            ),
            Recipe::new(
                "recipe2",
                "Cake Recipe",
                vec!["1 cup flour".to_string(), "1/2 cup sugar".to_string()],
            ),
        ];

        let items = aggregate_ingredients(&recipes);
        assert_eq!(items.len(), 2);

        let flour = items.iter().find(|item| item.name == "flour").unwrap();
        assert_eq!(flour.quantity, "3");
        assert_eq!(flour.unit, "cups");
        assert!(flour
            .source_recipe_names
            .contains(&"Pasta Recipe".to_string()));
        assert!(flour
            .source_recipe_names
            .contains(&"Cake Recipe".to_string()));

        let sugar = items.iter().find(|item| item.name == "sugar").unwrap();
        assert_eq!(sugar.quantity, "1 1/2");
    }

    #[test]
    fn test_same_unit_is_plural_insensitive() {
        assert!(same_unit("cup", "cups"));
        assert!(same_unit("cups", "cup"));
        assert!(same_unit("tbsp", "tbsp"));
        assert!(same_unit("", ""));
        assert!(!same_unit("cup", "tbsp"));
        assert!(!same_unit("cup", ""));
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate_ingredients(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_unit_mismatch_stays_separate() {
        let recipes = vec![
            Recipe::new("r1", "A", vec!["1 cup flour".to_string()]),
            Recipe::new("r2", "B", vec!["1 tbsp flour".to_string()]),
        ];

        let items = aggregate_ingredients(&recipes);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit, "cup");
        assert_eq!(items[1].unit, "tbsp");
    }

    #[test]
    fn test_aggregate_uncombinable_quantities_stay_separate() {
        let recipes = vec![
            Recipe::new("r1", "A", vec!["salt to taste".to_string()]),
            Recipe::new("r2", "B", vec!["salt to taste".to_string()]),
        ];

        let items = aggregate_ingredients(&recipes);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source_recipe_ids, vec!["r1".to_string()]);
        assert_eq!(items[1].source_recipe_ids, vec!["r2".to_string()]);
    }

    #[test]
    fn test_aggregate_synonym_merge() {
        let recipes = vec![
            Recipe::new("r1", "A", vec!["1 cup flour".to_string()]),
            Recipe::new("r2", "B", vec!["2 cup all purpose flour".to_string()]),
        ];

        let items = aggregate_ingredients(&recipes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "3");
        // first contribution names the merged entry
        assert_eq!(items[0].name, "flour");
    }

    #[test]
    fn test_aggregate_same_recipe_contributes_twice() {
        let recipes = vec![Recipe::new(
            "r1",
            "Bread",
            vec!["1 cup flour".to_string(), "1 cup flour".to_string()],
        )];

        let items = aggregate_ingredients(&recipes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "2");
        assert_eq!(
            items[0].source_recipe_ids,
            vec!["r1".to_string(), "r1".to_string()]
        );
    }

    #[test]
    fn test_aggregate_preserves_first_encounter_order() {
        let recipes = vec![
            Recipe::new(
                "r1",
                "A",
                vec!["2 cups flour".to_string(), "1 cup sugar".to_string()],
            ),
            Recipe::new(
                "r2",
                "B",
                vec!["3 large eggs".to_string(), "1 cup flour".to_string()],
            ),
        ];

        let items = aggregate_ingredients(&recipes);
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "sugar", "large eggs"]);
    }
}
