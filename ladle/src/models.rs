//! Core data models for the recipe catalog.
//!
//! `Recipe` is the raw dataset row; `SearchableRecipe` adds the derived
//! lowercase fields every engine matches against. Both are immutable after
//! construction.

use serde::{Deserialize, Serialize};

/// A recipe record as loaded from the static dataset.
///
/// Only `name` is required. Dataset rows may carry extra fields (macros,
/// servings, caption snippets); serde ignores anything the core does not
/// use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Source link, when the dataset has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Stable identifier; the dedup/display key when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
}

impl Recipe {
    /// Display/dedup key: `shortcode` when present, else `name`.
    /// Uniqueness of this key within a dataset is a caller concern.
    pub fn key(&self) -> &str {
        self.shortcode.as_deref().unwrap_or(&self.name)
    }
}

/// A recipe with precomputed searchable fields.
///
/// Built once per recipe-set change by [`crate::normalize::build_searchable_recipes`];
/// every engine (lexical, chips, vector filter) matches against the same
/// normalized fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableRecipe {
    pub recipe: Recipe,
    /// `ingredients` with blank and instruction-like lines removed.
    pub clean_ingredients: Vec<String>,
    /// Lowercase of `name`.
    pub normalized_name: String,
    /// Lowercase of `clean_ingredients` joined by single spaces.
    pub normalized_ingredient_text: String,
}

impl SearchableRecipe {
    pub fn name(&self) -> &str {
        &self.recipe.name
    }

    pub fn key(&self) -> &str {
        self.recipe.key()
    }
}
