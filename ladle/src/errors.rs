//! Error taxonomy for the non-pure edges of the crate.
//!
//! The pure search modules (normalize, ranking, search, highlight, filters,
//! vector) never fail on well-typed input and return plain values. Errors
//! only arise at the dataset boundary and in the two external AI-mode
//! collaborators.

use thiserror::Error;

/// Failures loading the static recipe or embedding datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The embeddings array must be index-aligned with the recipe array.
    /// A length mismatch indicates a build-time data bug, so loading fails
    /// fast rather than searching over silently misaligned rows.
    #[error("embeddings/recipes misaligned: {embeddings} embeddings for {recipes} recipes")]
    Misaligned { embeddings: usize, recipes: usize },
}

/// Failures from the query-parsing service.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("parse service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parse service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// The AI search mode cannot run because no embeddings were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("semantic search not ready: no embeddings loaded")]
pub struct NotReadyError;

/// Failures from the embedding worker.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The backend reported a computation failure for this query.
    #[error("embedding computation failed: {0}")]
    Backend(String),

    /// The worker task is gone; no further requests can be served.
    #[error("embedding worker unavailable")]
    WorkerGone,
}
