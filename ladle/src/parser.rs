//! Client for the query-parsing service.
//!
//! The AI mode sends the raw user query to a small LLM-backed endpoint
//! that returns a structured interpretation: search keywords, hard
//! ingredient constraints, and a short conversational reply. The trait
//! seam exists so tests and alternative backends can stand in for the
//! HTTP service.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::ParseError;

/// Structured interpretation of a free-text query.
///
/// All fields are optional on the wire; absent ones default to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Keyword phrase to embed for the vector search.
    pub keywords: Vec<String>,
    /// Ingredients the results must contain.
    pub must_include: Vec<String>,
    /// Ingredients the results must not contain.
    pub must_exclude: Vec<String>,
    /// Short conversational reply to show above the results.
    pub reply: String,
}

impl ParsedQuery {
    /// The reply to display, falling back to a canned line when the
    /// service returned none.
    pub fn reply_or_fallback(&self, query: &str) -> String {
        if self.reply.trim().is_empty() {
            format!("Searching for \"{query}\"...")
        } else {
            self.reply.clone()
        }
    }
}

/// Turns a raw query into a [`ParsedQuery`].
#[async_trait]
pub trait QueryParser: Send + Sync {
    async fn parse(&self, query: &str) -> Result<ParsedQuery, ParseError>;
}

/// [`QueryParser`] backed by an HTTP endpoint.
///
/// POSTs `{"query": "..."}` and expects a [`ParsedQuery`] JSON body back.
pub struct RemoteQueryParser {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteQueryParser {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QueryParser for RemoteQueryParser {
    async fn parse(&self, query: &str) -> Result<ParsedQuery, ParseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParseError::Status(status));
        }

        Ok(response.json().await?)
    }
}
