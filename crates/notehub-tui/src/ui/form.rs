// ABOUTME: Create-note modal rendering
// ABOUTME: Centered overlay with title, content, and tag fields plus errors

use crate::app::App;
use crate::types::{FormField, Mode};
use crate::ui::centered_rect;
use notehub_client::NoteTag;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

fn field_block(title: &str, focused: bool, error: Option<&str>) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().red()
    } else if focused {
        Style::default().cyan()
    } else {
        Style::default().dark_gray()
    };
    let title = match error {
        Some(msg) => format!(" {} — {} ", title, msg),
        None => format!(" {} ", title),
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

pub fn render(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let submitting = app.mode == Mode::Submitting;
    let outer_title = if submitting {
        format!(" Create note {} ", app.throbber_char())
    } else {
        " Create note ".to_string()
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().cyan())
        .title(outer_title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(4),    // Content
        Constraint::Length(3), // Tag
        Constraint::Length(1), // Error / hint line
    ])
    .split(inner);

    let form = &app.form;

    // Title field
    let title_focused = form.field == FormField::Title && !submitting;
    let mut title_spans = vec![Span::raw(form.title.as_str())];
    if title_focused {
        title_spans.push(Span::styled("█", Style::default().dim()));
    }
    let title_para = Paragraph::new(Line::from(title_spans)).block(field_block(
        "Title",
        title_focused,
        form.errors.title.as_deref(),
    ));
    f.render_widget(title_para, chunks[0]);

    // Content field (multiline textarea)
    let content_focused = form.field == FormField::Content && !submitting;
    let content_block = field_block("Content", content_focused, form.errors.content.as_deref());
    let content_inner = content_block.inner(chunks[1]);
    f.render_widget(content_block, chunks[1]);
    f.render_widget(&form.content, content_inner);

    // Tag selector
    let tag_focused = form.field == FormField::Tag && !submitting;
    let mut tag_spans: Vec<Span> = vec![];
    for tag in NoteTag::ALL {
        let style = if tag == form.tag() {
            Style::default().reversed().bold()
        } else {
            Style::default().dim()
        };
        tag_spans.push(Span::styled(format!(" {} ", tag), style));
        tag_spans.push(Span::raw(" "));
    }
    let tag_para =
        Paragraph::new(Line::from(tag_spans)).block(field_block("Tag", tag_focused, None));
    f.render_widget(tag_para, chunks[2]);

    // Server rejection or key hints
    let footer = if let Some(err) = &form.submit_error {
        Line::from(Span::styled(format!(" ✗ {} ", err), Style::default().red()))
    } else if submitting {
        Line::from(Span::styled(" Creating... ", Style::default().dim()))
    } else {
        Line::from(Span::styled(
            " Tab: next field │ Enter: create │ Esc: cancel ",
            Style::default().dim(),
        ))
    };
    f.render_widget(Paragraph::new(footer), chunks[3]);
}
