use anyhow::{Context, Result};
use log::info;
use shopping_list::aggregator::aggregate_ingredients;
use shopping_list::ingredient_model::Recipe;
use shopping_list::shopping_list::ShoppingList;
use std::env;
use std::fs;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let mut args = env::args().skip(1);
    let path = args
        .next()
        .context("usage: shopping-list <recipes.json> [list name]")?;
    let list_name = args.next().unwrap_or_else(|| "Shopping List".to_string());

    info!("Reading recipes from: {}", path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read recipes file: {}", path))?;
    let recipes: Vec<Recipe> =
        serde_json::from_str(&contents).context("Failed to parse recipes JSON")?;

    info!("Loaded {} recipes", recipes.len());

    let aggregated = aggregate_ingredients(&recipes);
    let list = ShoppingList::from_aggregated(&list_name, &aggregated, |index| {
        format!("item-{}", index + 1)
    });

    info!(
        "Aggregated {} recipes into {} shopping items",
        recipes.len(),
        list.total_count()
    );

    print!("{}", list.format_for_sharing());

    Ok(())
}
