// ABOUTME: Note list rendering
// ABOUTME: One card per note: title, tag badge, content preview, updated time

use crate::app::App;
use chrono::Local;
use notehub_client::NoteTag;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const PREVIEW_CHARS: usize = 80;

fn tag_color(tag: NoteTag) -> Color {
    match tag {
        NoteTag::Todo => Color::Yellow,
        NoteTag::Work => Color::Blue,
        NoteTag::Personal => Color::Magenta,
        NoteTag::Meeting => Color::Green,
        NoteTag::Shopping => Color::Cyan,
    }
}

fn preview(content: &str) -> Option<String> {
    let first_line = content.lines().next()?.trim();
    if first_line.is_empty() {
        return None;
    }
    let truncated: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if truncated.chars().count() < first_line.chars().count() {
        Some(format!("{}...", truncated))
    } else {
        Some(truncated)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    match app.visible() {
        Some(data) if !data.notes.is_empty() => {
            for note in &data.notes {
                let updated = note
                    .updated_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string();

                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", note.tag),
                        Style::default().fg(tag_color(note.tag)).reversed(),
                    ),
                    Span::raw(" "),
                    Span::styled(note.title.as_str(), Style::default().bold()),
                ]));
                if let Some(text) = preview(&note.content) {
                    lines.push(Line::from(Span::styled(
                        format!("   {}", text),
                        Style::default().dim(),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("   updated {}", updated),
                    Style::default().dark_gray(),
                )));
                lines.push(Line::from(""));
            }
        }
        Some(_) => {
            lines.push(Line::from(Span::styled(
                " No notes found.",
                Style::default().dim(),
            )));
        }
        None => {
            let text = if app.error.is_some() {
                " Error loading notes.".to_string()
            } else {
                format!(" {} Loading notes...", app.throbber_char())
            };
            lines.push(Line::from(Span::styled(text, Style::default().dim())));
        }
    }

    // scroll_offset counts lines from the top, clamped to the content
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let scroll = (app.scroll_offset as u16).min(max_scroll);

    let para = Paragraph::new(lines).scroll((scroll, 0));
    f.render_widget(para, area);
}
