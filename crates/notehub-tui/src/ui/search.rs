// ABOUTME: Search box rendering
// ABOUTME: Shows the raw input; the debounced value drives the query

use crate::app::App;
use crate::types::Mode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.mode == Mode::Browse;
    let border_style = if focused {
        Style::default().cyan()
    } else {
        Style::default().dark_gray()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search notes ");

    let mut spans = vec![Span::raw(app.search_input.as_str())];
    if focused {
        spans.push(Span::styled("█", Style::default().dim()));
    }
    if app.search_input.is_empty() {
        spans.push(Span::styled(" type to filter", Style::default().dim()));
    }

    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}
