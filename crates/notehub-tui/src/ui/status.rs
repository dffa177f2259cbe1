// ABOUTME: Bottom status bar rendering
// ABOUTME: Shows page position, totals, filter, loading, errors, keybinds

use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![];

    match app.visible() {
        Some(data) => {
            spans.push(Span::styled(
                format!(" page {}/{} ", app.page, data.total_pages.max(1)),
                Style::default().bold(),
            ));
            spans.push(Span::styled(
                format!("│ {} notes ", data.total),
                Style::default().dim(),
            ));
        }
        None => {
            spans.push(Span::styled(" no data ", Style::default().dim()));
        }
    }

    let filter = app.debounced_search.trim();
    if !filter.is_empty() {
        spans.push(Span::styled(
            format!("│ filter: {} ", filter),
            Style::default().dim(),
        ));
    }

    if app.loading {
        spans.push(Span::styled(
            format!("│ {} ", app.throbber_char()),
            Style::default().green(),
        ));
    }

    if let Some(err) = &app.error {
        spans.push(Span::styled(format!("│ ✗ {} ", err), Style::default().red()));
    } else if app.show_ctrl_c_hint() {
        spans.push(Span::styled(
            "│ Press Ctrl+C again to quit ",
            Style::default().yellow(),
        ));
    }

    spans.push(Span::styled(
        "│ ←/→: page │ Ctrl+N: new note │ Ctrl+Q: quit ",
        Style::default().dim(),
    ));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().on_dark_gray());
    f.render_widget(para, area);
}
