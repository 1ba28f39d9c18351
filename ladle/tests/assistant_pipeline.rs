//! End-to-end tests of the AI search orchestration with stub backends.

use std::sync::Arc;

use async_trait::async_trait;

use ladle::assistant::{GENERIC_ERROR_REPLY, RESULT_LIMIT};
use ladle::{
    Assistant, AssistantState, Dataset, EmbedError, EmbedderHandle, EmbeddingBackend,
    EmbeddingWorker, ParseError, ParsedQuery, QueryParser, Recipe,
};

struct StubParser {
    response: Result<ParsedQuery, ()>,
}

impl StubParser {
    fn ok(parsed: ParsedQuery) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(parsed),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { response: Err(()) })
    }
}

#[async_trait]
impl QueryParser for StubParser {
    async fn parse(&self, _query: &str) -> Result<ParsedQuery, ParseError> {
        match &self.response {
            Ok(parsed) => Ok(parsed.clone()),
            Err(()) => Err(ParseError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }
}

struct StubBackend {
    response: Result<Vec<f32>, ()>,
}

impl StubBackend {
    fn spawn_ok(embedding: Vec<f32>) -> EmbedderHandle {
        EmbeddingWorker::spawn(Arc::new(Self {
            response: Ok(embedding),
        }))
    }

    fn spawn_failing() -> EmbedderHandle {
        EmbeddingWorker::spawn(Arc::new(Self { response: Err(()) }))
    }
}

#[async_trait]
impl EmbeddingBackend for StubBackend {
    async fn embed(&self, _query: &str) -> Result<Vec<f32>, EmbedError> {
        match &self.response {
            Ok(embedding) => Ok(embedding.clone()),
            Err(()) => Err(EmbedError::Backend("stub failure".to_string())),
        }
    }
}

fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: Vec::new(),
        url: None,
        shortcode: None,
    }
}

/// Three recipes on unit vectors at increasing angles from the x axis, so a
/// query embedding of [1, 0] ranks them in declaration order.
fn small_dataset() -> Dataset {
    let recipes = vec![
        recipe("Chicken Soup", &["chicken", "carrots", "broth"]),
        recipe("Chicken Satay", &["chicken", "peanuts"]),
        recipe("Lentil Curry", &["lentils", "coconut milk"]),
    ];
    let embeddings = vec![
        vec![1.0, 0.0],
        vec![0.8, 0.6],
        vec![0.6, 0.8],
    ];
    Dataset::from_parts(recipes, embeddings).unwrap()
}

fn parsed(must_include: &[&str], must_exclude: &[&str], reply: &str) -> ParsedQuery {
    ParsedQuery {
        keywords: Vec::new(),
        must_include: must_include.iter().map(|s| s.to_string()).collect(),
        must_exclude: must_exclude.iter().map(|s| s.to_string()).collect(),
        reply: reply.to_string(),
    }
}

fn result_names(state: &AssistantState) -> Vec<String> {
    match state {
        AssistantState::Done { results, .. } => results.iter().map(|r| r.name.clone()).collect(),
        other => panic!("expected Done, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_success_ranks_by_similarity() -> anyhow::Result<()> {
    let assistant = Assistant::new(
        small_dataset(),
        StubParser::ok(parsed(&[], &[], "Here you go!")),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    let state = assistant.submit("something warming").await?;
    assert_eq!(
        result_names(&state),
        vec!["Chicken Soup", "Chicken Satay", "Lentil Curry"]
    );
    match state {
        AssistantState::Done { query, reply, .. } => {
            assert_eq!(query, "something warming");
            assert_eq!(reply, "Here you go!");
        }
        other => panic!("expected Done, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn submit_applies_ingredient_constraints() -> anyhow::Result<()> {
    let assistant = Assistant::new(
        small_dataset(),
        StubParser::ok(parsed(&["chicken"], &["nuts"], "")),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    // "chicken" drops Lentil Curry; "nuts" drops Chicken Satay (peanuts)
    let state = assistant.submit("chicken dinner no nuts").await?;
    assert_eq!(result_names(&state), vec!["Chicken Soup"]);
    Ok(())
}

#[tokio::test]
async fn submit_uses_fallback_reply() {
    let assistant = Assistant::new(
        small_dataset(),
        StubParser::ok(parsed(&[], &[], "")),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    match assistant.submit("cozy soup").await.unwrap() {
        AssistantState::Done { reply, .. } => {
            assert_eq!(reply, "Searching for \"cozy soup\"...");
        }
        other => panic!("expected Done, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_truncates_results() {
    let count = RESULT_LIMIT + 8;
    let recipes = (0..count)
        .map(|i| recipe(&format!("Recipe {i:02}"), &["salt"]))
        .collect();
    let embeddings = (0..count).map(|_| vec![1.0, 0.0]).collect();
    let dataset = Dataset::from_parts(recipes, embeddings).unwrap();

    let assistant = Assistant::new(
        dataset,
        StubParser::ok(ParsedQuery::default()),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    let state = assistant.submit("anything").await.unwrap();
    assert_eq!(result_names(&state).len(), RESULT_LIMIT);
}

#[tokio::test]
async fn parser_failure_yields_error_state_with_query() {
    let assistant = Assistant::new(
        small_dataset(),
        StubParser::failing(),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    match assistant.submit("dinner ideas").await.unwrap() {
        AssistantState::Error { query, reply } => {
            assert_eq!(query, "dinner ideas");
            assert_eq!(reply, GENERIC_ERROR_REPLY);
        }
        other => panic!("expected Error, got {other:?}"),
    }
    assert!(matches!(assistant.state(), AssistantState::Error { .. }));
}

#[tokio::test]
async fn embedder_failure_yields_error_state() {
    let assistant = Assistant::new(
        small_dataset(),
        StubParser::ok(ParsedQuery::default()),
        StubBackend::spawn_failing(),
    );

    match assistant.submit("dinner ideas").await.unwrap() {
        AssistantState::Error { reply, .. } => assert_eq!(reply, GENERIC_ERROR_REPLY),
        other => panic!("expected Error, got {other:?}"),
    }
}

/// Fails the first parse call, succeeds afterwards.
struct FlakyParser {
    failed_once: std::sync::atomic::AtomicBool,
}

#[async_trait]
impl QueryParser for FlakyParser {
    async fn parse(&self, _query: &str) -> Result<ParsedQuery, ParseError> {
        if !self.failed_once.swap(true, std::sync::atomic::Ordering::SeqCst) {
            return Err(ParseError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(parsed(&[], &[], "Second time lucky"))
    }
}

#[tokio::test]
async fn resubmit_after_error_replaces_state() {
    let assistant = Assistant::new(
        small_dataset(),
        Arc::new(FlakyParser {
            failed_once: std::sync::atomic::AtomicBool::new(false),
        }),
        StubBackend::spawn_ok(vec![1.0, 0.0]),
    );

    // First attempt fails but keeps the query for retry
    let retry_query = match assistant.submit("first try").await.unwrap() {
        AssistantState::Error { query, .. } => query,
        other => panic!("expected Error, got {other:?}"),
    };

    match assistant.submit(&retry_query).await.unwrap() {
        AssistantState::Done { reply, .. } => assert_eq!(reply, "Second time lucky"),
        other => panic!("expected Done, got {other:?}"),
    }
}
