//! # Shopping List Demo
//!
//! This example walks through the full pipeline: parsing free-text
//! ingredient lines, checking name equivalence, aggregating the
//! ingredients of two recipes into a consolidated shopping list, and
//! rendering the list as shareable plain text.

use shopping_list::aggregator::{aggregate_ingredients, combine_quantities};
use shopping_list::ingredient_matching::{are_ingredients_same, normalize_ingredient_name};
use shopping_list::ingredient_model::Recipe;
use shopping_list::ingredient_parser::parse_ingredient;
use shopping_list::shopping_list::ShoppingList;

fn main() {
    println!("🛒 Shopping List Aggregation Demo");
    println!("==================================\n");

    // Example 1: parsing individual ingredient lines
    println!("📖 Example 1: Parsing Ingredient Lines");
    println!("---------------------------------------");

    for line in [
        "2 cups flour",
        "1/2 teaspoon salt",
        "3 large eggs",
        "2-3 tbsp olive oil",
        "salt to taste",
    ] {
        let parsed = parse_ingredient(line);
        println!(
            "  \"{}\" → quantity: \"{}\", unit: \"{}\", name: \"{}\"",
            line, parsed.quantity, parsed.unit, parsed.name
        );
    }

    println!();

    // Example 2: name normalization and equivalence
    println!("🔍 Example 2: Name Matching");
    println!("----------------------------");

    println!(
        "  normalize(\"All Purpose Flour\") = \"{}\"",
        normalize_ingredient_name("All Purpose Flour")
    );
    println!(
        "  flour ~ all purpose flour: {}",
        are_ingredients_same("flour", "all purpose flour")
    );
    println!(
        "  flour ~ sugar: {}",
        are_ingredients_same("flour", "sugar")
    );
    println!(
        "  combine 1 + 1/2 = {:?}",
        combine_quantities("1", "1/2")
    );

    println!();

    // Example 3: aggregating two recipes into one list
    println!("🧾 Example 3: Aggregating Two Recipes");
    println!("--------------------------------------");

    let recipes = vec![
        Recipe::new(
            "recipe-1",
            "Pasta Night",
            vec![
                "2 cups flour".to_string(),
                "1 cup sugar".to_string(),
                "3 large eggs".to_string(),
                "salt to taste".to_string(),
            ],
        ),
        Recipe::new(
            "recipe-2",
            "Birthday Cake",
            vec![
                "1 cup flour".to_string(),
                "1/2 cup sugar".to_string(),
                "2 large eggs".to_string(),
            ],
        ),
    ];

    let aggregated = aggregate_ingredients(&recipes);

    println!("Aggregated {} items:", aggregated.len());
    for item in &aggregated {
        println!("  • {} (from: {})", item, item.source_summary());
    }

    println!();

    // Example 4: assembling and sharing a shopping list
    println!("📤 Example 4: Shareable List");
    println!("-----------------------------");

    let mut list = ShoppingList::from_aggregated("Weekend Groceries", &aggregated, |index| {
        format!("item-{}", index + 1)
    });
    list.toggle_item("item-1");

    println!("{}", list.format_for_sharing());
}
