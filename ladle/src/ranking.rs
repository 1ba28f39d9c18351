//! Tiered lexical scoring for recipe search.
//!
//! Every query token is assigned a match tier against one recipe; a better
//! tier always costs less. A recipe only ranks at all when every token
//! matches somewhere (name or ingredient text) — one miss excludes it.

use crate::models::SearchableRecipe;

/// Match quality of a single query token against one recipe.
/// Lower cost = better. Derived `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TokenTier {
    /// Token is a prefix of the normalized name.
    NamePrefix,
    /// Token occurs somewhere in the normalized name.
    NameContains,
    /// Token occurs only in the normalized ingredient text.
    IngredientOnly,
}

impl TokenTier {
    pub fn cost(self) -> u32 {
        match self {
            TokenTier::NamePrefix => 0,
            TokenTier::NameContains => 1,
            TokenTier::IngredientOnly => 2,
        }
    }
}

/// Classify one token against one recipe. `None` means the token matches
/// neither field, which disqualifies the whole recipe.
/// Tokens must already be lowercased.
pub fn token_tier(recipe: &SearchableRecipe, token: &str) -> Option<TokenTier> {
    let name_contains = recipe.normalized_name.contains(token);
    let ingredient_contains = recipe.normalized_ingredient_text.contains(token);

    if !name_contains && !ingredient_contains {
        return None;
    }

    if recipe.normalized_name.starts_with(token) {
        Some(TokenTier::NamePrefix)
    } else if name_contains {
        Some(TokenTier::NameContains)
    } else {
        Some(TokenTier::IngredientOnly)
    }
}

/// Aggregate cost of a recipe for a token set (AND semantics).
/// `None` when any token fails to match; lower totals rank first.
pub fn score_recipe(recipe: &SearchableRecipe, tokens: &[String]) -> Option<u32> {
    let mut total = 0u32;
    for token in tokens {
        total += token_tier(recipe, token)?.cost();
    }
    Some(total)
}
