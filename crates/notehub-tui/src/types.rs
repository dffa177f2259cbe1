// ABOUTME: Core types for notehub-tui
// ABOUTME: Mode, PageQuery cache key, and create-form state

use notehub_client::models::{CONTENT_MAX, TITLE_MAX, TITLE_MIN};
use notehub_client::{NoteDraft, NoteTag};
use tui_textarea::TextArea;

/// Notes shown per page unless overridden on the command line
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Application mode / screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the note list; keystrokes edit the search box
    Browse,
    /// Create-note modal is open
    Compose,
    /// Create request in flight - form input disabled
    Submitting,
}

/// Cache key for one paginated, filtered view of notes.
/// Two queries are equal iff page, page size, and normalized search match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    /// Trimmed search text; whitespace-only input collapses to None
    pub search: Option<String>,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32, search: &str) -> Self {
        let trimmed = search.trim();
        Self {
            page,
            per_page,
            search: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }
}

/// Which create-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Tag,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Tag,
            FormField::Tag => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Tag,
            FormField::Content => FormField::Title,
            FormField::Tag => FormField::Content,
        }
    }
}

/// Field-scoped validation errors. Tag is valid by construction (the form
/// cycles a fixed enumeration), so only title and content can fail.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// State of the create-note modal
pub struct NoteForm {
    pub title: String,
    pub content: TextArea<'static>,
    pub tag_index: usize,
    pub field: FormField,
    pub errors: FieldErrors,
    /// Message from a server-side rejection, shown below the fields
    pub submit_error: Option<String>,
    /// Untouched forms cannot be submitted
    pub dirty: bool,
}

impl NoteForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: TextArea::default(),
            tag_index: 0,
            field: FormField::Title,
            errors: FieldErrors::default(),
            submit_error: None,
            dirty: false,
        }
    }

    pub fn tag(&self) -> NoteTag {
        NoteTag::ALL[self.tag_index % NoteTag::ALL.len()]
    }

    pub fn cycle_tag(&mut self, step: i32) {
        let len = NoteTag::ALL.len() as i32;
        let next = (self.tag_index as i32 + step).rem_euclid(len);
        self.tag_index = next as usize;
        self.dirty = true;
    }

    fn content_text(&self) -> String {
        self.content.lines().join("\n").trim().to_string()
    }

    /// Re-checks every field, records per-field errors, and reports whether
    /// the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let title_len = self.title.trim().chars().count();
        self.errors.title = if title_len < TITLE_MIN {
            Some(format!("at least {} characters required", TITLE_MIN))
        } else if title_len > TITLE_MAX {
            Some(format!("at most {} characters allowed", TITLE_MAX))
        } else {
            None
        };

        let content_len = self.content_text().chars().count();
        self.errors.content = if content_len > CONTENT_MAX {
            Some(format!("at most {} characters allowed", CONTENT_MAX))
        } else {
            None
        };

        self.errors.is_empty()
    }

    /// Build the draft to send. Call only after [`validate`](Self::validate)
    /// has passed.
    pub fn draft(&self) -> NoteDraft {
        let content = self.content_text();
        NoteDraft::new(
            self.title.trim(),
            if content.is_empty() {
                None
            } else {
                Some(content)
            },
            self.tag(),
        )
    }
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}
