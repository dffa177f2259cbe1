// ABOUTME: Central application state and event handling
// ABOUTME: Single struct holds all state, mutations happen in handle_* methods

use crate::client::Outcome;
use crate::query::{QueryCache, Settled};
use crate::types::{FormField, Mode, NoteForm, PageQuery};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notehub_client::{FetchNotesResponse, NoteDraft};
use std::time::{Duration, Instant};

/// Quiescence window before a search edit becomes the active query
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Actions that need async handling (returned from handle_key / handle_outcome)
#[derive(Debug)]
pub enum Action {
    Quit,
    Fetch { query: PageQuery, request_id: u64 },
    Create(NoteDraft),
}

/// Central application state
pub struct App {
    // Mode
    pub mode: Mode,

    // Paging + search
    pub per_page: u32,
    pub page: u32,
    /// Raw search box contents, updated on every keystroke
    pub search_input: String,
    /// Last committed (debounced) search value
    pub debounced_search: String,
    /// Stamp of the most recent uncommitted search edit
    pub last_edit: Option<Instant>,

    // Query state
    pub cache: QueryCache,
    /// Last accepted result, kept visible while a refetch is in flight
    pub current: Option<FetchNotesResponse>,
    pub loading: bool,
    pub error: Option<String>,

    // Create form
    pub form: NoteForm,

    // List scroll
    pub scroll_offset: usize,

    // Quit handling
    pub last_ctrl_c: Option<Instant>,

    // Throbber animation frame
    pub throbber_frame: usize,
}

impl App {
    pub fn new(per_page: u32, initial_search: Option<String>) -> Self {
        let search = initial_search.unwrap_or_default();
        Self {
            mode: Mode::Browse,
            per_page,
            page: 1,
            search_input: search.clone(),
            debounced_search: search,
            last_edit: None,
            cache: QueryCache::new(),
            current: None,
            loading: false,
            error: None,
            form: NoteForm::new(),
            scroll_offset: 0,
            last_ctrl_c: None,
            throbber_frame: 0,
        }
    }

    /// The query the UI currently wants displayed
    pub fn active_query(&self) -> PageQuery {
        PageQuery::new(self.page, self.per_page, &self.debounced_search)
    }

    /// Data to render: cache hit for the active query, else the previous
    /// result so a key change never flashes to empty.
    pub fn visible(&self) -> Option<&FetchNotesResponse> {
        self.cache.get(&self.active_query()).or(self.current.as_ref())
    }

    pub fn total_pages(&self) -> u32 {
        self.visible().map(|d| d.total_pages).unwrap_or(0)
    }

    /// Fetch for the active query unless an identical request is already
    /// the latest in flight.
    pub fn refresh(&mut self) -> Option<Action> {
        let query = self.active_query();
        let request_id = self.cache.request(&query)?;
        self.loading = true;
        Some(Action::Fetch { query, request_id })
    }

    /// Advance throbber animation
    pub fn tick(&mut self) {
        self.throbber_frame = (self.throbber_frame + 1) % 8;
    }

    /// Get current throbber character
    pub fn throbber_char(&self) -> char {
        const THROBBER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
        THROBBER[self.throbber_frame]
    }

    /// Commit the search box once it has been quiet for the debounce
    /// window. Intermediate values inside the window are discarded; a
    /// committed change restarts pagination at page 1.
    pub fn poll_search(&mut self, now: Instant) -> Option<Action> {
        let last = self.last_edit?;
        if now.duration_since(last) < DEBOUNCE {
            return None;
        }
        self.last_edit = None;

        let changed = self.search_input.trim() != self.debounced_search.trim();
        self.debounced_search = self.search_input.clone();
        if !changed {
            return None;
        }
        self.page = 1;
        self.scroll_offset = 0;
        self.refresh()
    }

    /// Handle a key event, returning an action if needed
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global keys
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::Quit);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(last) = self.last_ctrl_c {
                    if last.elapsed() < Duration::from_millis(500) {
                        return Some(Action::Quit);
                    }
                }
                self.last_ctrl_c = Some(Instant::now());
                return None;
            }
            _ => {}
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Compose => self.handle_compose_key(key),
            Mode::Submitting => None,
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form = NoteForm::new();
                self.mode = Mode::Compose;
            }

            // Paging
            KeyCode::Left => {
                if self.page > 1 {
                    self.page -= 1;
                    self.scroll_offset = 0;
                    return self.refresh();
                }
            }
            KeyCode::Right => {
                if self.page < self.total_pages() {
                    self.page += 1;
                    self.scroll_offset = 0;
                    return self.refresh();
                }
            }

            // List scroll
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }

            // Search box editing
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.last_edit = Some(Instant::now());
            }
            KeyCode::Backspace => {
                if self.search_input.pop().is_some() {
                    self.last_edit = Some(Instant::now());
                }
            }
            KeyCode::Esc => {
                if !self.search_input.is_empty() {
                    self.search_input.clear();
                    self.last_edit = Some(Instant::now());
                }
            }
            _ => {}
        }
        None
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.form = NoteForm::new();
                return None;
            }
            KeyCode::Tab => {
                self.form.field = self.form.field.next();
                return None;
            }
            KeyCode::BackTab => {
                self.form.field = self.form.field.prev();
                return None;
            }
            KeyCode::Enter if self.form.field != FormField::Content => {
                return self.submit();
            }
            _ => {}
        }

        match self.form.field {
            FormField::Title => match key.code {
                KeyCode::Char(c) => {
                    self.form.title.push(c);
                    self.form.dirty = true;
                }
                KeyCode::Backspace => {
                    self.form.title.pop();
                    self.form.dirty = true;
                }
                _ => {}
            },
            FormField::Content => {
                if self.form.content.input(key) {
                    self.form.dirty = true;
                }
            }
            FormField::Tag => match key.code {
                KeyCode::Left => self.form.cycle_tag(-1),
                KeyCode::Right => self.form.cycle_tag(1),
                _ => {}
            },
        }

        // Clear stale field errors as the user fixes them
        if !self.form.errors.is_empty() {
            self.form.validate();
        }
        None
    }

    /// Validate and kick off the create request. Untouched or invalid
    /// forms block submission and nothing leaves the process.
    fn submit(&mut self) -> Option<Action> {
        if !self.form.dirty || !self.form.validate() {
            return None;
        }
        let draft = self.form.draft();
        self.form.submit_error = None;
        self.mode = Mode::Submitting;
        Some(Action::Create(draft))
    }

    /// Handle a completed request from the async side
    pub fn handle_outcome(&mut self, outcome: Outcome) -> Option<Action> {
        match outcome {
            Outcome::Fetched {
                request_id,
                query,
                result,
            } => match result {
                Ok(data) => {
                    if self.cache.settle(request_id, &query, Some(data.clone())) == Settled::Stale {
                        tracing::debug!(request_id, "discarding stale fetch result");
                        return None;
                    }
                    self.loading = false;
                    self.error = None;
                    let total_pages = data.total_pages;
                    self.current = Some(data);
                    // A shrunken result set can strand the page past the end
                    if total_pages >= 1 && self.page > total_pages {
                        self.page = total_pages;
                        return self.refresh();
                    }
                    if total_pages == 0 {
                        self.page = 1;
                    }
                    None
                }
                Err(err) => {
                    if self.cache.settle(request_id, &query, None) == Settled::Accepted {
                        self.loading = false;
                        self.error = Some(err.to_string());
                    }
                    None
                }
            },
            Outcome::Created { result } => match result {
                Ok(note) => {
                    tracing::debug!(id = %note.id, "note created");
                    self.cache.invalidate_all();
                    self.form = NoteForm::new();
                    self.mode = Mode::Browse;
                    self.refresh()
                }
                Err(err) => {
                    self.mode = Mode::Compose;
                    self.form.submit_error = Some(err.to_string());
                    None
                }
            },
        }
    }

    /// Check if Ctrl+C hint should be shown
    pub fn show_ctrl_c_hint(&self) -> bool {
        self.last_ctrl_c
            .map(|t| t.elapsed() < Duration::from_millis(500))
            .unwrap_or(false)
    }
}
