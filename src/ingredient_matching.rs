//! # Ingredient Name Matching
//!
//! Name normalization and equivalence checks used by the aggregation
//! engine to decide when two differently-worded ingredient lines refer to
//! the same shopping item.
//!
//! Equivalence is deterministic: exact match after normalization, or a
//! lookup in a fixed synonym table mapping a base term to its known
//! textual variants. There is no fuzzy matching, so "brown sugar" stays
//! distinct from "sugar" unless the table says otherwise.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_matching::{are_ingredients_same, normalize_ingredient_name};
//!
//! assert_eq!(normalize_ingredient_name("All Purpose Flour"), "all purpose flour");
//! assert!(are_ingredients_same("flour", "all purpose flour"));
//! assert!(!are_ingredients_same("flour", "sugar"));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Characters that are neither word characters nor whitespace
    static ref NON_WORD: Regex =
        Regex::new(r"[^\w\s]").expect("non-word character pattern should be valid");

    /// Runs of whitespace, collapsed to single spaces
    static ref WHITESPACE_RUNS: Regex =
        Regex::new(r"\s+").expect("whitespace run pattern should be valid");

    /// Base term → known textual variants. Two names are equivalent when
    /// each is either the base term or one of its variants.
    static ref SYNONYM_TABLE: HashMap<&'static str, &'static [&'static str]> = {
        let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        table.insert("flour", &["all purpose flour", "plain flour", "wheat flour"]);
        table.insert("sugar", &["granulated sugar", "white sugar"]);
        table.insert("salt", &["table salt", "kosher salt"]);
        table.insert("pepper", &["black pepper", "ground pepper"]);
        table.insert("oil", &["olive oil", "vegetable oil", "cooking oil"]);
        table.insert("butter", &["unsalted butter", "salted butter"]);
        table.insert("milk", &["whole milk", "skim milk", "2% milk"]);
        table.insert("eggs", &["egg", "large eggs", "medium eggs"]);
        table.insert("onion", &["yellow onion", "white onion", "red onion"]);
        table.insert("garlic", &["garlic cloves", "minced garlic"]);
        table.insert("tomato", &["tomatoes", "tomato sauce", "tomato paste"]);
        table.insert("cheese", &["cheddar cheese", "parmesan cheese", "mozzarella cheese"]);
        table
    };
}

/// Normalize an ingredient name for matching.
///
/// Lowercases, strips everything but word characters and whitespace,
/// collapses whitespace runs, and trims. Idempotent and total.
pub fn normalize_ingredient_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Decide whether two ingredient names denote the same shopping item.
///
/// Names are compared after normalization; unequal names are equivalent
/// only when both resolve to the same base term of the synonym table
/// (either side may be the base term itself or a listed variant).
pub fn are_ingredients_same(name_a: &str, name_b: &str) -> bool {
    let a = normalize_ingredient_name(name_a);
    let b = normalize_ingredient_name(name_b);

    if a == b {
        return true;
    }

    SYNONYM_TABLE.iter().any(|(base, variants)| {
        let a_known = a == *base || variants.iter().any(|variant| a == *variant);
        let b_known = b == *base || variants.iter().any(|variant| b == *variant);
        a_known && b_known
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_ingredient_name("All Purpose Flour"), "all purpose flour");
        assert_eq!(normalize_ingredient_name("  Salt  "), "salt");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_ingredient_name("Olive Oil!"), "olive oil");
        assert_eq!(normalize_ingredient_name("tomatoes, diced"), "tomatoes diced");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_ingredient_name("whole   milk"), "whole milk");
        assert_eq!(normalize_ingredient_name("a\t b\n c"), "a b c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["All Purpose Flour", "  Salt  ", "Olive Oil!", "2% milk", ""] {
            let once = normalize_ingredient_name(input);
            assert_eq!(normalize_ingredient_name(&once), once);
        }
    }

    #[test]
    fn test_same_identical_names() {
        assert!(are_ingredients_same("flour", "flour"));
        assert!(are_ingredients_same("Flour", "flour"));
    }

    #[test]
    fn test_same_base_and_variant() {
        assert!(are_ingredients_same("flour", "all purpose flour"));
        assert!(are_ingredients_same("plain flour", "flour"));
        assert!(are_ingredients_same("eggs", "egg"));
    }

    #[test]
    fn test_same_two_variants() {
        assert!(are_ingredients_same("all purpose flour", "plain flour"));
        assert!(are_ingredients_same("olive oil", "vegetable oil"));
    }

    #[test]
    fn test_different_ingredients() {
        assert!(!are_ingredients_same("flour", "sugar"));
        assert!(!are_ingredients_same("salt", "pepper"));
    }

    #[test]
    fn test_unlisted_variant_stays_distinct() {
        // Not in the table, so no merge
        assert!(!are_ingredients_same("brown sugar", "sugar"));
        assert!(!are_ingredients_same("bread flour", "flour"));
    }
}
