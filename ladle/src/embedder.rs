//! Off-thread query embedding.
//!
//! Embedding a query is slow relative to the rest of the pipeline, so it
//! runs on a dedicated worker task behind a channel. Requests carry a
//! monotonically increasing id and responses are correlated back through a
//! shared pending map, so a slow embed never blocks a later one and every
//! caller gets the answer to its own query.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use crate::errors::EmbedError;

/// Computes the embedding vector for a query string.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    async fn embed(&self, query: &str) -> Result<Vec<f32>, EmbedError>;
}

struct EmbedRequest {
    id: u64,
    query: String,
}

type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Vec<f32>, EmbedError>>>>>;

/// Spawns the worker task that services embedding requests.
pub struct EmbeddingWorker;

impl EmbeddingWorker {
    /// Spawn a worker driving `backend` and return a handle for submitting
    /// queries. The worker exits when every handle has been dropped.
    pub fn spawn(backend: Arc<dyn EmbeddingBackend>) -> EmbedderHandle {
        let (tx, mut rx) = mpsc::unbounded_channel::<EmbedRequest>();
        let pending: PendingMap = Arc::default();

        let worker_pending = pending.clone();
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                // Each request gets its own task so responses can complete
                // out of order.
                let backend = backend.clone();
                let pending = worker_pending.clone();
                tokio::spawn(async move {
                    let result = backend.embed(&request.query).await;
                    if let Some(reply) = pending.lock().remove(&request.id) {
                        let _ = reply.send(result);
                    }
                });
            }
        });

        EmbedderHandle {
            tx,
            pending,
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Cheaply cloneable handle to the embedding worker.
#[derive(Clone)]
pub struct EmbedderHandle {
    tx: mpsc::UnboundedSender<EmbedRequest>,
    pending: PendingMap,
    next_id: Arc<AtomicU64>,
}

impl EmbedderHandle {
    /// Submit a query and wait for its embedding.
    pub async fn embed_query(&self, query: &str) -> Result<Vec<f32>, EmbedError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.pending.lock().insert(id, reply_tx);

        let request = EmbedRequest {
            id,
            query: query.to_string(),
        };
        if self.tx.send(request).is_err() {
            self.pending.lock().remove(&id);
            return Err(EmbedError::WorkerGone);
        }

        reply_rx.await.map_err(|_| EmbedError::WorkerGone)?
    }
}
