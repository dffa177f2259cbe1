// ABOUTME: Thin wrapper around notehub-client for TUI use
// ABOUTME: Spawns requests onto tokio and reports outcomes over a channel

use crate::types::PageQuery;
use notehub_client::{FetchNotesResponse, Note, NoteDraft, NoteError, NotesClient};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completed request events sent through the outcome channel
#[derive(Debug)]
pub enum Outcome {
    Fetched {
        /// Id issued by the query cache; stale ids are discarded on arrival
        request_id: u64,
        query: PageQuery,
        result: Result<FetchNotesResponse, NoteError>,
    },
    Created {
        result: Result<Note, NoteError>,
    },
}

/// TUI client wrapper. Each call spawns a task and returns immediately;
/// the UI loop picks results up from the channel.
pub struct Client {
    inner: Arc<NotesClient>,
    tx: mpsc::Sender<Outcome>,
}

impl Client {
    pub fn new(inner: NotesClient, tx: mpsc::Sender<Outcome>) -> Self {
        Self {
            inner: Arc::new(inner),
            tx,
        }
    }

    pub fn fetch(&self, query: PageQuery, request_id: u64) {
        let inner = self.inner.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = inner
                .list_notes(query.page, query.per_page, query.search.as_deref())
                .await;
            let _ = tx
                .send(Outcome::Fetched {
                    request_id,
                    query,
                    result,
                })
                .await;
        });
    }

    pub fn create(&self, draft: NoteDraft) {
        let inner = self.inner.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = inner.create_note(&draft).await;
            let _ = tx.send(Outcome::Created { result }).await;
        });
    }
}

impl Clone for Client {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            tx: self.tx.clone(),
        }
    }
}
