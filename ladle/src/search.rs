//! Lexical search engine.
//!
//! Tokenizes the query, scores every recipe with the tiered costs from the
//! ranking module, drops non-matches, sorts, and truncates. Fully
//! deterministic: the same inputs always produce the same ordered output.

use crate::models::SearchableRecipe;
use crate::ranking::score_recipe;

/// Default result cap, applied after full ranking.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Split a query into lowercase tokens on whitespace runs.
/// Empty and whitespace-only queries produce no tokens.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Search recipes for a free-text query.
///
/// A recipe is returned only when every token matches its name or
/// ingredient text. Results sort by ascending total cost, ties broken by
/// ascending `name`; truncation to `limit` happens after the full sort.
/// An empty query returns the first `limit` recipes in input order.
pub fn search_recipes<'a>(
    recipes: &'a [SearchableRecipe],
    query: &str,
    limit: usize,
) -> Vec<&'a SearchableRecipe> {
    let tokens = tokenize_query(query);

    if tokens.is_empty() {
        return recipes.iter().take(limit).collect();
    }

    let mut ranked: Vec<(u32, &SearchableRecipe)> = recipes
        .iter()
        .filter_map(|recipe| score_recipe(recipe, &tokens).map(|score| (score, recipe)))
        .collect();

    ranked.sort_by(|(score_a, a), (score_b, b)| {
        score_a
            .cmp(score_b)
            .then_with(|| a.name().cmp(b.name()))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, recipe)| recipe)
        .collect()
}
