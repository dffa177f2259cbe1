// ABOUTME: Pagination row rendering
// ABOUTME: Pure windowed page-cell mapping; hidden entirely for one page

use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// One rendered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCell {
    Page { number: u32, selected: bool },
    Ellipsis,
}

/// Map (current page, total pages) to the row of controls. First and last
/// pages are always shown, plus a one-page window around the current page;
/// gaps collapse to an ellipsis. Empty when there is nothing to page.
pub fn page_cells(current: u32, total: u32) -> Vec<PageCell> {
    if total <= 1 {
        return vec![];
    }

    let mut cells = vec![];
    let mut last_shown: u32 = 0;
    for number in 1..=total {
        let near_current = number.abs_diff(current) <= 1;
        if number != 1 && number != total && !near_current {
            continue;
        }
        if last_shown != 0 && number > last_shown + 1 {
            cells.push(PageCell::Ellipsis);
        }
        cells.push(PageCell::Page {
            number,
            selected: number == current,
        });
        last_shown = number;
    }
    cells
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cells = page_cells(app.page, app.total_pages());
    if cells.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled(" ← ", Style::default().dim())];
    for cell in cells {
        match cell {
            PageCell::Page { number, selected } => {
                let style = if selected {
                    Style::default().reversed().bold()
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!(" {} ", number), style));
            }
            PageCell::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().dim()));
            }
        }
    }
    spans.push(Span::styled(" → ", Style::default().dim()));

    let para = Paragraph::new(Line::from(spans)).centered();
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(cells: &[PageCell]) -> Vec<u32> {
        cells
            .iter()
            .filter_map(|c| match c {
                PageCell::Page { number, .. } => Some(*number),
                PageCell::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(page_cells(1, 0).is_empty());
        assert!(page_cells(1, 1).is_empty());
    }

    #[test]
    fn test_small_totals_show_every_page() {
        for total in 2..=4 {
            let cells = page_cells(1, total);
            assert_eq!(numbers(&cells), (1..=total).collect::<Vec<_>>());
            assert!(!cells.contains(&PageCell::Ellipsis));
        }
    }

    #[test]
    fn test_exactly_one_cell_is_selected() {
        let cells = page_cells(3, 8);
        let selected: Vec<u32> = cells
            .iter()
            .filter_map(|c| match c {
                PageCell::Page {
                    number,
                    selected: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![3]);
    }

    #[test]
    fn test_middle_page_windows_with_ellipses() {
        let cells = page_cells(5, 10);
        assert_eq!(numbers(&cells), vec![1, 4, 5, 6, 10]);
        assert_eq!(
            cells.iter().filter(|c| **c == PageCell::Ellipsis).count(),
            2
        );
    }

    #[test]
    fn test_edges_omit_leading_or_trailing_ellipsis() {
        let first = page_cells(1, 10);
        assert_eq!(numbers(&first), vec![1, 2, 10]);
        assert_eq!(first.first(), Some(&PageCell::Page { number: 1, selected: true }));

        let last = page_cells(10, 10);
        assert_eq!(numbers(&last), vec![1, 9, 10]);
        assert!(matches!(last.last(), Some(PageCell::Page { number: 10, .. })));
    }
}
