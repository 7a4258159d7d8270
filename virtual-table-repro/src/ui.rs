//! Terminal view: header rows on top, windowed body rows below, true-count scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use tablecore::{RowRef, TableModel};

use crate::app::{ESTIMATED_ROW_HEIGHT, ReproApp};
use crate::data::Person;

pub fn draw(frame: &mut Frame, app: &ReproApp) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(app.header_rows()), Constraint::Min(0)])
        .split(frame.area());
    draw_header(frame, app.model(), layout[0]);
    draw_body(frame, app, layout[1]);
}

fn draw_header(frame: &mut Frame, model: &TableModel<Person>, area: Rect) {
    let groups = model.header_groups();
    let mut lines = Vec::with_capacity(groups.len() + 1);
    for group in groups {
        let leaf_row = group.depth + 1 == groups.len();
        let mut spans = Vec::with_capacity(group.headers.len() * 2);
        for (i, header) in group.headers.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            // A header spanning n leaves also covers the n - 1 gutters between them.
            let cell = header.width as usize + header.span.saturating_sub(1);
            if header.is_placeholder {
                spans.push(Span::raw(" ".repeat(cell)));
            } else if leaf_row {
                spans.push(Span::styled(
                    pad_to(&header.title, cell),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(pad_to(&header.title, cell)));
            }
        }
        lines.push(Line::from(spans));
    }
    let rule_width = model.total_width() as usize + model.leaf_columns().len().saturating_sub(1);
    lines.push(Line::from("-".repeat(rule_width)));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Paints each windowed row at its stacked position plus its translation, shifted by the
/// scroll offset. Rows falling outside the body are clipped, not clamped.
fn draw_body(frame: &mut Frame, app: &ReproApp, area: Rect) {
    let window = app.window();
    let scroll_offset = window.scroll_offset() as i64;
    // The last column is the scrollbar track.
    let text_width = area.width.saturating_sub(1);

    for row in app.render_rows() {
        let line =
            row.position as i64 * i64::from(ESTIMATED_ROW_HEIGHT) + row.translation - scroll_offset;
        // The translation must land each row at its true canvas offset.
        debug_assert_eq!(line + scroll_offset, row.start as i64);
        if line < 0 || line >= i64::from(area.height) {
            continue;
        }
        let Some(row_ref) = app.model().row(row.index) else {
            continue;
        };
        let line_area = Rect {
            x: area.x,
            y: area.y + line as u16,
            width: text_width,
            height: (i64::from(area.height) - line).min(i64::from(row.size)) as u16,
        };
        frame.render_widget(Paragraph::new(row_line(row_ref)), line_area);
    }

    // Content length is the full canvas, not the rendered subset, so the scrollbar always
    // reflects the true row count.
    let mut scrollbar = ScrollbarState::new(window.total_size() as usize)
        .position(window.scroll_offset() as usize);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut scrollbar,
    );
}

fn row_line(row: RowRef<'_, Person>) -> Line<'static> {
    let mut spans = Vec::new();
    row.for_each_cell(|column, value| {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(pad_to(&value.to_string(), column.width as usize)));
    });
    Line::from(spans)
}

/// Truncates to `width` characters and right-pads with spaces.
fn pad_to(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
