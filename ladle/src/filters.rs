//! Quick category filter chips.
//!
//! A fixed catalog of labeled term sets, each term compiled once at startup
//! to a word-boundary pattern (so "rice" does not fire on "riceberry"
//! inside a longer word, and "pie" not on "pierogi"). Within one chip the
//! terms OR together; across active chips the results AND.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SearchableRecipe;

/// One labeled category filter backed by literal terms.
pub struct FilterChipDef {
    pub label: &'static str,
    pub terms: &'static [&'static str],
    patterns: Vec<Regex>,
}

impl FilterChipDef {
    fn new(label: &'static str, terms: &'static [&'static str]) -> Self {
        let patterns = terms
            .iter()
            .map(|term| {
                Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                    .expect("escaped chip term always compiles")
            })
            .collect();
        Self {
            label,
            terms,
            patterns,
        }
    }

    /// True when any of this chip's terms matches the recipe's normalized
    /// name or ingredient text at a word boundary.
    pub fn matches(&self, recipe: &SearchableRecipe) -> bool {
        self.patterns.iter().any(|pattern| {
            pattern.is_match(&recipe.normalized_name)
                || pattern.is_match(&recipe.normalized_ingredient_text)
        })
    }
}

/// The chip catalog. Static data, never mutated at runtime.
pub static FILTER_CHIPS: Lazy<Vec<FilterChipDef>> = Lazy::new(|| {
    vec![
        FilterChipDef::new("Chicken", &["chicken"]),
        FilterChipDef::new("Beef", &["beef"]),
        FilterChipDef::new("Lamb", &["lamb"]),
        FilterChipDef::new(
            "Fish",
            &[
                "fish", "salmon", "tuna", "tilapia", "cod", "trout", "shrimp", "prawn", "halibut",
                "sea bass", "sardine", "anchovy",
            ],
        ),
        FilterChipDef::new(
            "Pasta",
            &[
                "pasta",
                "spaghetti",
                "noodle",
                "linguine",
                "penne",
                "fettuccine",
                "rigatoni",
                "orzo",
                "lasagna",
                "tagliatelle",
            ],
        ),
        FilterChipDef::new("Rice", &["rice"]),
        FilterChipDef::new("Potato", &["potato"]),
        FilterChipDef::new(
            "Bread",
            &["bread", "pita", "flatbread", "focaccia", "loaf", "baguette", "naan"],
        ),
        FilterChipDef::new("Salad", &["salad"]),
        FilterChipDef::new("Soup", &["soup", "stew", "broth", "chowder", "bisque"]),
        FilterChipDef::new(
            "Dessert",
            &[
                "cake", "cookie", "chocolate", "brownie", "halva", "dessert", "pie", "tart",
                "pudding", "fudge", "mousse",
            ],
        ),
        FilterChipDef::new("Egg", &["egg", "omelette", "frittata"]),
        FilterChipDef::new("Chickpeas", &["chickpea"]),
        FilterChipDef::new(
            "One-Pan",
            &["one-pan", "one pan", "one-pot", "one pot", "one-skillet", "sheet pan"],
        ),
    ]
});

/// Look up a chip by its user-facing label.
pub fn chip_by_label(label: &str) -> Option<&'static FilterChipDef> {
    FILTER_CHIPS.iter().find(|chip| chip.label == label)
}

/// True when the recipe passes every active chip independently.
/// Unknown labels are vacuously true rather than excluding everything.
pub fn matches_all_filters(recipe: &SearchableRecipe, active_labels: &[&str]) -> bool {
    active_labels.iter().all(|label| {
        chip_by_label(label)
            .map(|chip| chip.matches(recipe))
            .unwrap_or(true)
    })
}

/// Per-chip result counts over a result set, for UI badge display.
/// Computed against the chip-unfiltered results so badges show what each
/// chip would yield.
pub fn chip_counts(results: &[&SearchableRecipe]) -> HashMap<&'static str, usize> {
    FILTER_CHIPS
        .iter()
        .map(|chip| {
            let count = results.iter().filter(|r| chip.matches(r)).count();
            (chip.label, count)
        })
        .collect()
}
