// ABOUTME: Data models for notehub-client
// ABOUTME: Note, NoteTag, list response, and the validated create draft

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Title bounds enforced before any create request leaves the client
pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 50;
/// Content is optional but capped
pub const CONTENT_MAX: usize = 500;

/// Fixed tag enumeration understood by the NoteHub API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    /// All tags, in the order the create form cycles through them
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }
}

impl std::fmt::Display for NoteTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note as returned by the server. Ids and timestamps are server-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of notes. Replaced wholesale on refetch, never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNotesResponse {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    pub total_pages: u32,
}

/// Fields for a note the server has not seen yet
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tag: NoteTag,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: Option<String>, tag: NoteTag) -> Self {
        Self {
            title: title.into(),
            content,
            tag,
        }
    }

    /// Client-side validation. An Err here means the draft never reaches
    /// the network.
    pub fn validate(&self) -> Result<(), NoteError> {
        let title_len = self.title.chars().count();
        if title_len < TITLE_MIN {
            return Err(NoteError::Validation(format!(
                "title must be at least {} characters",
                TITLE_MIN
            )));
        }
        if title_len > TITLE_MAX {
            return Err(NoteError::Validation(format!(
                "title must be at most {} characters",
                TITLE_MAX
            )));
        }
        if let Some(content) = &self.content {
            if content.chars().count() > CONTENT_MAX {
                return Err(NoteError::Validation(format!(
                    "content must be at most {} characters",
                    CONTENT_MAX
                )));
            }
        }
        Ok(())
    }
}
