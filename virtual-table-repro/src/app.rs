//! Application state: one table model and one row window, driven in sync.

use rowwindow::{Align, RowWindow, WindowOptions};
use tablecore::TableModel;

use crate::columns::person_columns;
use crate::data::{Person, make_people};

/// Number of top-level records generated at startup.
///
/// The count is the whole point of this program: datasets with a single record used to
/// paint their one row at the wrong offset, while any count of two or more rendered
/// correctly. The windowing math now comes out right for every count, including 0 and 1;
/// the small-count tests below pin the fixed behavior. Set this to 1 to eyeball that case.
pub const ROW_COUNT: usize = 100;

/// Dataset seed. Fixed so every run shows identical rows.
pub const DATA_SEED: u64 = 0x7ab1e;

/// Every row is one terminal cell row tall.
pub const ESTIMATED_ROW_HEIGHT: u32 = 1;

/// Rows kept rendered beyond each edge of the viewport.
pub const OVERSCAN: usize = 20;

/// One windowed row, as the view paints it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRow {
    /// Absolute row index in the model.
    pub index: usize,
    /// Position within the window; 0 for the first windowed row.
    pub position: usize,
    /// Offset of the row in the virtual canvas.
    pub start: u64,
    pub size: u32,
    /// Vertical correction applied on top of the stacked layout.
    pub translation: i64,
}

/// The one arithmetic expression the reproduction hangs on.
///
/// Windowed rows are laid out stacked: the row at window position `i` sits `i` row heights
/// below the first. The translation then moves each row to its true start offset in the
/// virtual canvas, `start - position * height`. If the rendered set and the windowed set
/// ever disagree, rows visibly land on the wrong lines.
pub fn row_translation(entry_start: u64, position: usize) -> i64 {
    entry_start as i64 - position as i64 * i64::from(ESTIMATED_ROW_HEIGHT)
}

pub struct ReproApp {
    model: TableModel<Person>,
    window: RowWindow,
}

impl ReproApp {
    pub fn new() -> Self {
        Self::with_row_count(ROW_COUNT)
    }

    /// Builds the app over `count` top-level records. Tests drive the interesting counts.
    pub fn with_row_count(count: usize) -> Self {
        let model = TableModel::new(person_columns(), make_people(DATA_SEED, &[count]))
            .with_get_sub_rows(|person: &Person| person.sub_rows.as_slice())
            .with_debug(true);
        let window = RowWindow::new(
            WindowOptions::fixed(model.row_count(), ESTIMATED_ROW_HEIGHT).with_overscan(OVERSCAN),
        );
        Self { model, window }
    }

    pub fn model(&self) -> &TableModel<Person> {
        &self.model
    }

    pub fn window(&self) -> &RowWindow {
        &self.window
    }

    /// Terminal rows the view reserves above the body: one per header group, plus a rule.
    pub fn header_rows(&self) -> u16 {
        self.model.header_groups().len() as u16 + 1
    }

    /// Tracks a terminal resize. The body viewport is whatever the header leaves over.
    pub fn resize(&mut self, terminal_rows: u16) {
        let body = terminal_rows.saturating_sub(self.header_rows());
        let offset = self.window.scroll_offset();
        self.window
            .set_viewport_and_scroll_clamped(u32::from(body), offset);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.window.scroll_by(delta);
    }

    pub fn page_up(&mut self) {
        self.window.scroll_by(-i64::from(self.window.viewport()));
    }

    pub fn page_down(&mut self) {
        self.window.scroll_by(i64::from(self.window.viewport()));
    }

    pub fn scroll_to_top(&mut self) {
        self.window.scroll_to_index(0, Align::Start);
    }

    pub fn scroll_to_bottom(&mut self) {
        let count = self.window.count();
        if count > 0 {
            self.window.scroll_to_index(count - 1, Align::End);
        }
    }

    /// The rows the view paints this frame, exactly one per windowed entry.
    pub fn render_rows(&self) -> Vec<RenderRow> {
        let mut rows = Vec::new();
        let mut position = 0usize;
        self.window.for_each_entry(|entry| {
            rows.push(RenderRow {
                index: entry.index,
                position,
                start: entry.start,
                size: entry.size,
                translation: row_translation(entry.start, position),
            });
            position += 1;
        });
        rows
    }
}

impl Default for ReproApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(count: usize, terminal_rows: u16) -> ReproApp {
        let mut app = ReproApp::with_row_count(count);
        app.resize(terminal_rows);
        app
    }

    #[test]
    fn the_header_reserves_one_group_row_plus_a_rule() {
        let app = ReproApp::with_row_count(1);
        assert_eq!(app.header_rows(), 2);
    }

    #[test]
    fn rendered_rows_match_the_window() {
        let app = app_with(100, 24);
        let rows = app.render_rows();
        let range = app.window().window_range();
        assert_eq!(rows.len(), range.len());
        assert_eq!(rows.first().map(|r| r.index), Some(range.start_index));
        assert_eq!(rows.last().map(|r| r.index), Some(range.end_index - 1));
    }

    #[test]
    fn window_positions_are_contiguous_from_zero() {
        let app = app_with(100, 24);
        for (i, row) in app.render_rows().iter().enumerate() {
            assert_eq!(row.position, i);
        }
    }

    #[test]
    fn translation_lands_every_row_at_its_start_offset() {
        let mut app = app_with(100, 24);
        for delta in [0i64, 13, 42, 1_000] {
            app.scroll_by(delta);
            for row in app.render_rows() {
                assert_eq!(row.translation, row.start as i64 - row.position as i64);
                assert_eq!(row.position as i64 + row.translation, row.start as i64);
            }
        }
    }

    #[test]
    fn single_record_windows_and_renders_exactly_one_row() {
        let app = app_with(1, 24);
        let rows = app.render_rows();
        assert_eq!(app.window().window_range().len(), 1);
        assert_eq!(rows.len(), 1);
        let row = rows[0];
        assert_eq!(row.index, 0);
        assert_eq!(row.position, 0);
        assert_eq!(row.start, 0);
        assert_eq!(row.translation, 0);
    }

    #[test]
    fn single_record_stays_pinned_under_every_scroll_input() {
        let mut app = app_with(1, 24);
        app.scroll_by(5);
        app.page_down();
        app.scroll_to_bottom();
        assert_eq!(app.window().scroll_offset(), 0);
        let rows = app.render_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].translation, 0);
    }

    #[test]
    fn empty_dataset_renders_no_rows() {
        let mut app = app_with(0, 24);
        assert!(app.render_rows().is_empty());
        app.scroll_by(3);
        app.scroll_to_bottom();
        assert_eq!(app.window().scroll_offset(), 0);
        assert!(app.render_rows().is_empty());
    }

    #[test]
    fn two_records_render_two_rows_in_order() {
        let app = app_with(2, 24);
        let rows = app.render_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].index, rows[0].start), (0, 0));
        assert_eq!((rows[1].index, rows[1].start), (1, 1));
        assert_eq!(rows[1].translation, 0); // start 1, position 1
    }

    #[test]
    fn every_count_renders_exactly_the_windowed_set() {
        for count in 0..40 {
            let mut app = app_with(count, 12);
            for _ in 0..3 {
                let rows = app.render_rows();
                let range = app.window().window_range();
                assert_eq!(rows.len(), range.len(), "count {count}");
                for (i, row) in rows.iter().enumerate() {
                    assert_eq!(row.index, range.start_index + i);
                    assert_eq!(row.translation, row.start as i64 - row.position as i64);
                }
                app.scroll_by(7);
            }
        }
    }

    #[test]
    fn end_reveals_the_last_row_at_the_bottom_line() {
        let mut app = app_with(100, 24);
        app.scroll_to_bottom();
        let offset = app.window().scroll_offset();
        let viewport = u64::from(app.window().viewport());
        assert_eq!(offset, 100 - viewport);
        assert_eq!(app.window().visible_range().end_index, 100);

        let rows = app.render_rows();
        let last = rows.last().expect("windowed rows");
        assert_eq!(last.index, 99);
        // Painted line: stacked position plus translation, relative to the scroll offset.
        let line = last.position as i64 + last.translation - offset as i64;
        assert_eq!(line, viewport as i64 - 1);
    }

    #[test]
    fn paging_and_home_clamp_at_the_edges() {
        let mut app = app_with(100, 24);
        app.page_down();
        assert_eq!(app.window().scroll_offset(), 22);
        app.page_down();
        app.page_down();
        app.page_down();
        assert_eq!(app.window().scroll_offset(), 78);
        app.scroll_to_top();
        assert_eq!(app.window().scroll_offset(), 0);
        app.page_up();
        assert_eq!(app.window().scroll_offset(), 0);
    }

    #[test]
    fn resize_reclamps_the_scroll_offset() {
        let mut app = app_with(100, 12);
        app.scroll_to_bottom();
        assert_eq!(app.window().scroll_offset(), 90);
        app.resize(52);
        assert_eq!(app.window().viewport(), 50);
        assert_eq!(app.window().scroll_offset(), 50);
    }
}
