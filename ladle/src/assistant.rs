//! Orchestration of the AI search mode.
//!
//! One submission runs the query-parse request and the query embedding
//! concurrently, then intersects the vector results with the parser's hard
//! ingredient constraints. The state machine is re-entrant: a new
//! submission simply replaces whatever state came before, and an error
//! keeps the failed query around so the caller can retry it.
//!
//! There is no timeout or cancellation on the external calls; a hung
//! backend hangs the submission.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::dataset::Dataset;
use crate::embedder::EmbedderHandle;
use crate::errors::{EmbedError, NotReadyError, ParseError};
use crate::models::{Recipe, SearchableRecipe};
use crate::parser::QueryParser;
use crate::vector::{apply_ingredient_filters, vector_search};

/// How many nearest neighbors the vector search keeps before filtering.
pub const CANDIDATE_POOL_SIZE: usize = 24;

/// Maximum number of results a submission surfaces.
pub const RESULT_LIMIT: usize = 12;

/// Reply shown for any external failure.
pub const GENERIC_ERROR_REPLY: &str = "Something went wrong. Please try again.";

/// Where the assistant is in the submit lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantState {
    Idle,
    Loading {
        query: String,
    },
    Done {
        query: String,
        reply: String,
        results: Vec<Recipe>,
    },
    /// External failure; `query` is preserved for retry.
    Error {
        query: String,
        reply: String,
    },
}

enum ExternalFailure {
    Parse(ParseError),
    Embed(EmbedError),
}

/// The AI search mode over one loaded dataset.
pub struct Assistant {
    recipes: Vec<SearchableRecipe>,
    embeddings: Vec<Vec<f32>>,
    parser: Arc<dyn QueryParser>,
    embedder: EmbedderHandle,
    state: Mutex<AssistantState>,
}

impl Assistant {
    pub fn new(
        dataset: Dataset,
        parser: Arc<dyn QueryParser>,
        embedder: EmbedderHandle,
    ) -> Self {
        Self {
            recipes: dataset.recipes,
            embeddings: dataset.embeddings,
            parser,
            embedder,
            state: Mutex::new(AssistantState::Idle),
        }
    }

    /// False when no embeddings are loaded; [`Self::submit`] will refuse.
    pub fn is_ready(&self) -> bool {
        !self.embeddings.is_empty()
    }

    pub fn state(&self) -> AssistantState {
        self.state.lock().clone()
    }

    pub fn reset(&self) {
        *self.state.lock() = AssistantState::Idle;
    }

    /// Run one AI search submission to completion and return the resulting
    /// state (`Done` or `Error`). A blank query is ignored and leaves the
    /// current state unchanged.
    ///
    /// The parse request and the embedding run concurrently; both must
    /// succeed for `Done`. Results are the vector top candidates with the
    /// parser's must-include/must-exclude constraints applied, capped at
    /// [`RESULT_LIMIT`].
    pub async fn submit(&self, query: &str) -> Result<AssistantState, NotReadyError> {
        if !self.is_ready() {
            return Err(NotReadyError);
        }

        let query = query.trim().to_string();
        // Blank submissions are a no-op; the current state stands.
        if query.is_empty() {
            return Ok(self.state());
        }

        *self.state.lock() = AssistantState::Loading {
            query: query.clone(),
        };
        log::debug!("ai search started for {query:?}");

        let outcome = tokio::try_join!(
            async {
                self.parser
                    .parse(&query)
                    .await
                    .map_err(ExternalFailure::Parse)
            },
            async {
                self.embedder
                    .embed_query(&query)
                    .await
                    .map_err(ExternalFailure::Embed)
            },
        );

        let next = match outcome {
            Ok((parsed, embedding)) => {
                let hits = vector_search(
                    &embedding,
                    &self.embeddings,
                    &self.recipes,
                    CANDIDATE_POOL_SIZE,
                );
                let mut hits =
                    apply_ingredient_filters(hits, &parsed.must_include, &parsed.must_exclude);
                hits.truncate(RESULT_LIMIT);
                log::debug!("ai search for {query:?} returned {} results", hits.len());

                let results = hits.iter().map(|hit| hit.recipe.recipe.clone()).collect();
                AssistantState::Done {
                    reply: parsed.reply_or_fallback(&query),
                    query,
                    results,
                }
            }
            Err(failure) => {
                match &failure {
                    ExternalFailure::Parse(e) => log::warn!("query parse failed: {e}"),
                    ExternalFailure::Embed(e) => log::warn!("query embedding failed: {e}"),
                }
                AssistantState::Error {
                    query,
                    reply: GENERIC_ERROR_REPLY.to_string(),
                }
            }
        };

        *self.state.lock() = next.clone();
        Ok(next)
    }
}
