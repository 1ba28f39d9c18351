//! Semantic vector search plus ingredient hard filters for the AI mode.
//!
//! Recipe embeddings are precomputed offline, L2-normalized, and
//! index-aligned with the recipe array; pairing is positional. Because the
//! vectors are unit length, cosine similarity reduces to a dot product.

use rayon::prelude::*;

use crate::models::SearchableRecipe;

/// Dimension of the embedding model's output vectors.
pub const EMBEDDING_DIM: usize = 384;

/// Default number of nearest recipes returned by [`vector_search`].
pub const DEFAULT_TOP_K: usize = 20;

/// One vector-search result: a recipe and its similarity to the query.
#[derive(Debug, Clone)]
pub struct VectorHit<'a> {
    pub recipe: &'a SearchableRecipe,
    pub score: f32,
}

/// Dot product over equal-length vectors. Valid as cosine similarity only
/// because both inputs are unit-normalized by contract; not re-validated
/// here.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Rank recipes by similarity to the query embedding, descending, truncated
/// to `top_k`.
///
/// `recipe_embeddings[i]` pairs with `recipes[i]`; equal lengths and
/// matching order are a caller contract (the dataset loader enforces it at
/// load time).
pub fn vector_search<'a>(
    query_embedding: &[f32],
    recipe_embeddings: &[Vec<f32>],
    recipes: &'a [SearchableRecipe],
    top_k: usize,
) -> Vec<VectorHit<'a>> {
    debug_assert_eq!(recipe_embeddings.len(), recipes.len());

    let mut hits: Vec<VectorHit<'a>> = recipe_embeddings
        .par_iter()
        .zip(recipes.par_iter())
        .map(|(embedding, recipe)| VectorHit {
            recipe,
            score: cosine_similarity(query_embedding, embedding),
        })
        .collect();

    hits.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(top_k);
    hits
}

/// Apply the parser's hard ingredient constraints to vector results.
///
/// A hit survives when every `must_include` entry occurs in its normalized
/// ingredient text (lowercased literal substring) and no `must_exclude`
/// entry does. Relative order is preserved.
pub fn apply_ingredient_filters<'a>(
    results: Vec<VectorHit<'a>>,
    must_include: &[String],
    must_exclude: &[String],
) -> Vec<VectorHit<'a>> {
    results
        .into_iter()
        .filter(|hit| {
            let text = &hit.recipe.normalized_ingredient_text;

            let has_all = must_include
                .iter()
                .all(|ingredient| text.contains(&ingredient.to_lowercase()));
            if !has_all {
                return false;
            }

            must_exclude
                .iter()
                .all(|ingredient| !text.contains(&ingredient.to_lowercase()))
        })
        .collect()
}
