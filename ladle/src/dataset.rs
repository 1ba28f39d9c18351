//! Loading of the static recipe and embedding datasets.
//!
//! Both datasets are plain JSON arrays produced by an offline build step.
//! The embeddings array is index-aligned with the recipe array, and a
//! length mismatch is a build bug, so [`Dataset::from_parts`] fails fast on
//! misalignment instead of letting the vector engine pair wrong rows. An
//! empty embeddings array is legal and just disables semantic search.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::DatasetError;
use crate::models::{Recipe, SearchableRecipe};
use crate::normalize::build_searchable_recipes;
use crate::vector::EMBEDDING_DIM;

/// Read the recipe dataset from a JSON file.
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<Recipe>, DatasetError> {
    let file = File::open(path.as_ref())?;
    let recipes: Vec<Recipe> = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("loaded {} recipes from {}", recipes.len(), path.as_ref().display());
    Ok(recipes)
}

/// Read the precomputed recipe embeddings from a JSON file.
pub fn load_embeddings(path: impl AsRef<Path>) -> Result<Vec<Vec<f32>>, DatasetError> {
    let file = File::open(path.as_ref())?;
    let embeddings: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
    log::debug!(
        "loaded {} embeddings from {}",
        embeddings.len(),
        path.as_ref().display()
    );
    Ok(embeddings)
}

/// The loaded, validated datasets with searchable fields precomputed.
#[derive(Debug)]
pub struct Dataset {
    pub recipes: Vec<SearchableRecipe>,
    pub embeddings: Vec<Vec<f32>>,
}

impl Dataset {
    /// Validate and assemble already-decoded datasets.
    ///
    /// Fails with [`DatasetError::Misaligned`] when a non-empty embeddings
    /// array does not pair one-to-one with the recipes.
    pub fn from_parts(
        recipes: Vec<Recipe>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<Self, DatasetError> {
        if !embeddings.is_empty() && embeddings.len() != recipes.len() {
            return Err(DatasetError::Misaligned {
                embeddings: embeddings.len(),
                recipes: recipes.len(),
            });
        }

        if embeddings.is_empty() {
            log::warn!("no embeddings loaded; semantic search is disabled");
        } else if let Some(first) = embeddings.first() {
            if first.len() != EMBEDDING_DIM {
                log::warn!(
                    "embedding dimension is {} (expected {})",
                    first.len(),
                    EMBEDDING_DIM
                );
            }
        }

        Ok(Self {
            recipes: build_searchable_recipes(&recipes),
            embeddings,
        })
    }

    /// Load both datasets from disk. `embeddings_path` is optional; without
    /// it the dataset carries no embeddings and semantic search is off.
    pub fn load(
        recipes_path: impl AsRef<Path>,
        embeddings_path: Option<&Path>,
    ) -> Result<Self, DatasetError> {
        let recipes = load_recipes(recipes_path)?;
        let embeddings = match embeddings_path {
            Some(path) => load_embeddings(path)?,
            None => Vec::new(),
        };
        Self::from_parts(recipes, embeddings)
    }

    pub fn has_embeddings(&self) -> bool {
        !self.embeddings.is_empty()
    }
}
