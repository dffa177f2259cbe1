// ABOUTME: NoteHub API client library
// ABOUTME: List, create, and delete notes over authenticated HTTP

pub mod config;
pub mod error;
pub mod models;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::NoteError;
pub use models::{FetchNotesResponse, Note, NoteDraft, NoteTag};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;

/// Client for the NoteHub REST API. No caching, no retries: every call is a
/// single authenticated round-trip and a failure surfaces to the caller.
#[derive(Debug, Clone)]
pub struct NotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    pub fn new(config: ClientConfig) -> Result<Self, NoteError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| NoteError::Config("token contains invalid header characters".into()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NoteError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query params for a list request. A search value that trims to empty
    /// produces no `search` param at all.
    pub fn list_params(
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", page.to_string()),
            ("perPage", per_page.to_string()),
        ];
        if let Some(search) = search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                params.push(("search", trimmed.to_string()));
            }
        }
        params
    }

    /// Fetch one page of notes, optionally filtered by search text.
    pub async fn list_notes(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<FetchNotesResponse, NoteError> {
        let params = Self::list_params(page, per_page, search);
        tracing::debug!(page, per_page, ?search, "listing notes");

        let resp = self
            .http
            .get(format!("{}/notes", self.base_url))
            .query(&params)
            .send()
            .await?;
        let resp = Self::check(resp, "notes").await?;
        Ok(resp.json::<FetchNotesResponse>().await?)
    }

    /// Create a note. The draft is validated locally first; an invalid draft
    /// never reaches the network.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, NoteError> {
        draft.validate()?;
        tracing::debug!(title = %draft.title, tag = %draft.tag, "creating note");

        let resp = self
            .http
            .post(format!("{}/notes", self.base_url))
            .json(draft)
            .send()
            .await?;
        let resp = Self::check(resp, "notes").await?;
        Ok(resp.json::<Note>().await?)
    }

    /// Delete a note by id. The API echoes the deleted note back.
    pub async fn delete_note(&self, id: &str) -> Result<Note, NoteError> {
        tracing::debug!(id, "deleting note");

        let resp = self
            .http
            .delete(format!("{}/notes/{}", self.base_url, id))
            .send()
            .await?;
        let resp = Self::check(resp, id).await?;
        Ok(resp.json::<Note>().await?)
    }

    /// Turn a non-2xx response into the matching error variant, carrying
    /// whatever message body the server sent.
    async fn check(resp: reqwest::Response, target: &str) -> Result<reqwest::Response, NoteError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "request rejected");
        Err(NoteError::from_status(status.as_u16(), body, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_basic() {
        let params = NotesClient::list_params(1, 12, None);
        assert_eq!(
            params,
            vec![("page", "1".to_string()), ("perPage", "12".to_string())]
        );
    }

    #[test]
    fn test_list_params_trims_search() {
        let params = NotesClient::list_params(2, 12, Some("  groceries  "));
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], ("search", "groceries".to_string()));
    }

    #[test]
    fn test_list_params_omits_blank_search() {
        for blank in ["", "   ", "\t\n"] {
            let params = NotesClient::list_params(1, 12, Some(blank));
            assert!(
                params.iter().all(|(k, _)| *k != "search"),
                "blank search {:?} must not produce a search param",
                blank
            );
        }
    }

    #[test]
    fn test_new_rejects_bad_token() {
        let config = ClientConfig::new("http://localhost", "line\nbreak");
        assert!(matches!(NotesClient::new(config), Err(NoteError::Config(_))));
    }
}
