//! # Shopping List Core
//!
//! The ingredient-aggregation core of a recipe-management application:
//! parses free-text ingredient lines into structured records, recognizes
//! when differently-worded lines refer to the same purchasable item,
//! merges their quantities, and assembles shareable shopping lists that
//! track which recipes contributed each entry.

pub mod aggregator;
pub mod ingredient_matching;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod shopping_list;
