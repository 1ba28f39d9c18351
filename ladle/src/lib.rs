//! Ladle - Recipe search core
//!
//! This library implements the search and ranking engine behind a recipe
//! catalog UI: deterministic lexical multi-token search, quick category
//! filter chips, display highlighting, and a semantic ("ask AI") mode that
//! combines vector search over precomputed embeddings with an LLM-parsed
//! structured query.
//!
//! The lexical engine, normalizer, highlighter, and filter matcher are pure
//! and synchronous; only the assistant orchestration is async.

pub mod assistant;
pub mod dataset;
pub mod embedder;
pub mod errors;
pub mod filters;
pub mod highlight;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod ranking;
pub mod search;
pub mod vector;

pub use assistant::{Assistant, AssistantState};
pub use dataset::Dataset;
pub use embedder::{EmbedderHandle, EmbeddingBackend, EmbeddingWorker};
pub use errors::{DatasetError, EmbedError, NotReadyError, ParseError};
pub use highlight::HighlightSegment;
pub use models::{Recipe, SearchableRecipe};
pub use parser::{ParsedQuery, QueryParser, RemoteQueryParser};
pub use search::{search_recipes, DEFAULT_SEARCH_LIMIT};
pub use vector::{apply_ingredient_filters, cosine_similarity, vector_search, VectorHit};
