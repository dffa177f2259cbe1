// ABOUTME: notehub-tui - terminal client for NoteHub notes
// ABOUTME: Channel-based async architecture with Ratatui

pub mod app;
pub mod client;
pub mod query;
pub mod run;
pub mod types;
pub mod ui;
