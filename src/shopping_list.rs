//! # Shopping List Assembly
//!
//! Builds durable shopping lists from the aggregation engine's output and
//! renders them as plain text for sharing. Entries carry a caller-assigned
//! id (this crate never generates identifiers), a checked flag, and the
//! provenance recorded during aggregation. Hand-added entries are marked
//! `custom` and carry no provenance.
//!
//! Persistence itself stays outside this crate; list values are handed to
//! whatever store the application uses, verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::aggregator::aggregate_ingredients;
//! use shopping_list::ingredient_model::Recipe;
//! use shopping_list::shopping_list::ShoppingList;
//!
//! let recipes = vec![Recipe::new("r1", "Pasta", vec!["2 cups flour".to_string()])];
//! let aggregated = aggregate_ingredients(&recipes);
//!
//! let list = ShoppingList::from_aggregated("Week 32", &aggregated, |index| {
//!     format!("item-{}", index)
//! });
//! assert_eq!(list.total_count(), 1);
//! ```

use crate::ingredient_model::{write_item_fields, AggregatedShoppingItem};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Identifier assigned by the caller
    pub id: String,

    /// Descriptive item name
    pub name: String,

    /// Display quantity text, possibly combined, `""` if absent
    pub quantity: String,

    /// Lowercased unit token, `""` if absent
    pub unit: String,

    /// Whether the item has been purchased
    pub checked: bool,

    /// Whether the item was added by hand rather than aggregated
    pub custom: bool,

    /// Ids of contributing recipes; empty for custom items
    pub source_recipe_ids: Vec<String>,

    /// Titles of contributing recipes, parallel to `source_recipe_ids`
    pub source_recipe_names: Vec<String>,
}

impl ShoppingListItem {
    /// Build an entry from an aggregated item with a caller-assigned id
    pub fn from_aggregated(id: &str, item: &AggregatedShoppingItem) -> Self {
        Self {
            id: id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            unit: item.unit.clone(),
            checked: false,
            custom: false,
            source_recipe_ids: item.source_recipe_ids.clone(),
            source_recipe_names: item.source_recipe_names.clone(),
        }
    }

    /// Build a hand-added entry with no provenance
    pub fn custom(id: &str, name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.trim().to_string(),
            quantity: quantity.trim().to_string(),
            unit: unit.trim().to_string(),
            checked: false,
            custom: true,
            source_recipe_ids: Vec::new(),
            source_recipe_names: Vec::new(),
        }
    }

    /// Comma-joined titles of the contributing recipes
    pub fn source_summary(&self) -> String {
        self.source_recipe_names.join(", ")
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item_fields(f, &self.quantity, &self.unit, &self.name)
    }
}

/// A named shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Display name of the list
    pub name: String,

    /// Entries in insertion order
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    /// Create an empty list
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    /// Build a list from aggregation output. `assign_id` supplies the id
    /// for the entry at each position.
    pub fn from_aggregated<F>(
        name: &str,
        aggregated: &[AggregatedShoppingItem],
        mut assign_id: F,
    ) -> Self
    where
        F: FnMut(usize) -> String,
    {
        let items = aggregated
            .iter()
            .enumerate()
            .map(|(index, item)| ShoppingListItem::from_aggregated(&assign_id(index), item))
            .collect::<Vec<_>>();

        debug!("built shopping list '{}' with {} items", name, items.len());

        Self {
            name: name.to_string(),
            items,
        }
    }

    /// Append an entry
    pub fn add_item(&mut self, item: ShoppingListItem) {
        self.items.push(item);
    }

    /// Look up an entry by id for editing
    pub fn item_mut(&mut self, id: &str) -> Option<&mut ShoppingListItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Flip the checked state of the entry with the given id; returns
    /// false when no entry matches
    pub fn toggle_item(&mut self, id: &str) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id; returns false when no entry
    /// matches
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Number of checked entries
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Number of entries
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Render the list as plain text for sharing: unchecked entries under
    /// "To Buy:", checked entries under "Purchased:", empty sections
    /// omitted.
    pub fn format_for_sharing(&self) -> String {
        let unchecked: Vec<&ShoppingListItem> =
            self.items.iter().filter(|item| !item.checked).collect();
        let checked: Vec<&ShoppingListItem> =
            self.items.iter().filter(|item| item.checked).collect();

        let mut formatted = format!("{}\n\n", self.name);

        if !unchecked.is_empty() {
            formatted.push_str("To Buy:\n");
            for item in unchecked {
                formatted.push_str(&format!("☐ {}\n", item));
            }
        }

        if !checked.is_empty() {
            formatted.push_str("\nPurchased:\n");
            for item in checked {
                formatted.push_str(&format!("☑ {}\n", item));
            }
        }

        formatted
    }
}
