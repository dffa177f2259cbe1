// ABOUTME: UI rendering module for notehub-tui
// ABOUTME: Dispatches rendering to widget modules

mod form;
mod list;
pub mod pagination;
mod search;
mod status;

use crate::app::App;
use crate::types::Mode;
use ratatui::prelude::*;
use ratatui::Frame;

/// Create a centered rect using percentages of the parent rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

pub fn render(f: &mut Frame, app: &App) {
    // Pagination only gets a row when there is something to page through
    let paginated = app.total_pages() > 1;
    let chunks = if paginated {
        Layout::vertical([
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Note list
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(f.area())
    } else {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area())
    };

    search::render(f, chunks[0], app);
    list::render(f, chunks[1], app);
    if paginated {
        pagination::render(f, chunks[2], app);
        status::render(f, chunks[3], app);
    } else {
        status::render(f, chunks[2], app);
    }

    // Create-note modal is an overlay
    if app.mode == Mode::Compose || app.mode == Mode::Submitting {
        form::render(f, app);
    }
}
