//! Text normalization for recipe records.
//!
//! Scraped ingredient lists sometimes contain numbered instruction steps
//! that leaked in from the method section. A line is treated as a leaked
//! instruction when it starts with digits, a period, and whitespace
//! ("2. Stir for 5 minutes"). A bare decimal quantity like "1.5 teaspoons"
//! survives because no whitespace follows the period.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Recipe, SearchableRecipe};

/// Leaked numbered-step pattern. Known limitation: a genuinely numbered
/// ingredient line such as "1. Maldon salt" is also dropped; behavior
/// compatibility with the source dataset pipeline takes precedence.
static NUMBERED_STEP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+").unwrap());

/// Whether a line looks like an instruction step rather than an ingredient.
pub fn is_likely_instruction_line(line: &str) -> bool {
    NUMBERED_STEP_PATTERN.is_match(line)
}

/// Trim lines, drop blanks, drop instruction-like lines. Order is
/// preserved; applying this twice yields the same result as once.
pub fn clean_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter(|line| !is_likely_instruction_line(line))
        .map(str::to_string)
        .collect()
}

/// Build the derived searchable form of every recipe.
///
/// Pure and order-preserving: identical input always produces identical
/// output, so callers can memoize on recipe-set identity.
pub fn build_searchable_recipes(recipes: &[Recipe]) -> Vec<SearchableRecipe> {
    recipes
        .iter()
        .map(|recipe| {
            let clean = clean_ingredients(&recipe.ingredients);
            let normalized_ingredient_text = clean.join(" ").to_lowercase();
            SearchableRecipe {
                normalized_name: recipe.name.to_lowercase(),
                normalized_ingredient_text,
                clean_ingredients: clean,
                recipe: recipe.clone(),
            }
        })
        .collect()
}
