use alloc::vec::Vec;
use core::cmp;

use crate::sums::PrefixSums;
use crate::{Align, ScrollDirection, WindowEntry, WindowOptions, WindowRange};

/// A headless row-windowing engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport size and scroll offsets.
/// - Rendering is exposed via zero-allocation iteration APIs (`for_each_entry*`).
#[derive(Clone, Debug)]
pub struct RowWindow {
    options: WindowOptions,
    viewport: u32,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,

    sizes: Vec<u32>,
    measured: Vec<bool>,
    sums: PrefixSums,
}

impl RowWindow {
    /// Creates a new row window from options.
    ///
    /// `options.initial_viewport` and `options.initial_offset` are applied immediately; row
    /// sizes start at their estimates.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            overscan = options.overscan,
            "RowWindow::new"
        );
        let mut w = Self {
            viewport: options.initial_viewport,
            scroll_offset: options.initial_offset,
            scroll_direction: None,
            sizes: Vec::new(),
            measured: Vec::new(),
            sums: PrefixSums::new(0),
            options,
        };
        w.rebuild_from_estimates();
        w
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Changes the row count in place.
    ///
    /// Measurements are keyed by index: surviving rows keep their measured sizes, rows added by
    /// a grow start at their estimate, and rows removed by a shrink are dropped for good.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        wdebug!(from = self.options.count, to = count, "set_count");
        if count < self.options.count {
            self.sizes.truncate(count);
            self.measured.truncate(count);
            self.sums.truncate(count);
        } else {
            for i in self.options.count..count {
                let size = (self.options.estimate_size)(i);
                self.sizes.push(size);
                self.measured.push(false);
                self.sums.push(size as u64);
            }
        }
        self.options.count = count;
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: u32) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        wtrace!(viewport, "set_viewport");
    }

    /// Applies a viewport change and re-clamps the scroll offset in one step.
    ///
    /// This is the natural resize handler: shrinking the content or growing the viewport can
    /// leave the previous offset past `max_scroll_offset`.
    pub fn set_viewport_and_scroll_clamped(&mut self, viewport: u32, scroll_offset: u64) {
        self.set_viewport(viewport);
        self.set_scroll_offset_clamped(scroll_offset);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        wtrace!(offset, "set_scroll_offset");
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Scrolls by a signed delta, clamped to `[0, max_scroll_offset]`.
    ///
    /// Returns the applied offset.
    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        let target = if delta >= 0 {
            self.scroll_offset.saturating_add(delta as u64)
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        let clamped = self.clamp_scroll_offset(target);
        self.set_scroll_offset(clamped);
        clamped
    }

    /// Overrides the estimated size of one row with a measured size.
    ///
    /// Out-of-range indexes are ignored. The scroll offset is left untouched; see
    /// [`Self::measure_anchored`] when the measured row may sit above the viewport.
    pub fn measure(&mut self, index: usize, size: u32) {
        if index >= self.options.count {
            return;
        }
        wtrace!(index, size, "measure");
        self.set_row_size(index, size);
    }

    /// Like [`Self::measure`], but keeps the viewport content visually stable.
    ///
    /// When the measured row starts before the current scroll offset, the offset is shifted by
    /// the size delta so the rows on screen do not jump. Returns the applied delta (0 when no
    /// adjustment was needed).
    pub fn measure_anchored(&mut self, index: usize, size: u32) -> i64 {
        if index >= self.options.count {
            return 0;
        }
        let start = self.start_of(index);
        let delta = self.set_row_size(index, size);
        if delta == 0 || start >= self.scroll_offset {
            return 0;
        }
        wtrace!(index, size, delta, "measure_anchored");
        if delta > 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(delta as u64);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub((-delta) as u64);
        }
        delta
    }

    fn set_row_size(&mut self, index: usize, size: u32) -> i64 {
        let cur = self.sizes[index];
        self.measured[index] = true;
        if cur == size {
            return 0;
        }
        self.sizes[index] = size;
        let delta = size as i64 - cur as i64;
        self.sums.add(index, delta);
        delta
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// Discards all measurements and returns every row to its estimate.
    pub fn reset_measurements(&mut self) {
        wdebug!(count = self.options.count, "reset_measurements");
        self.rebuild_from_estimates();
    }

    pub fn total_size(&self) -> u64 {
        self.sums.total()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Returns the rows intersecting the viewport band (no overscan).
    pub fn visible_range(&self) -> WindowRange {
        self.visible_range_for(self.scroll_offset, self.viewport)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport: u32) -> WindowRange {
        let count = self.options.count;
        if count == 0 || viewport == 0 {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }

        let view = viewport as u64;
        let total = self.sums.total();
        // Offsets past the end behave as if scrolled to the end.
        let scroll_offset = scroll_offset.min(total.saturating_sub(view));
        if scroll_offset >= total {
            return WindowRange {
                start_index: count,
                end_index: count,
            };
        }

        let scroll_end = scroll_offset.saturating_add(view);
        let visible_end_inclusive = cmp::max(scroll_end.saturating_sub(1), scroll_offset);

        let last = count - 1;
        let start = self.sums.lower_bound(scroll_offset).min(last);
        let end = cmp::min(count, self.sums.lower_bound(visible_end_inclusive).min(last) + 1);

        WindowRange {
            start_index: start,
            end_index: end,
        }
    }

    /// Returns the visible range widened by `overscan` on both sides, clamped to `[0, count)`.
    pub fn window_range(&self) -> WindowRange {
        self.window_range_for(self.scroll_offset, self.viewport)
    }

    pub fn window_range_for(&self, scroll_offset: u64, viewport: u32) -> WindowRange {
        let mut range = self.visible_range_for(scroll_offset, viewport);
        if range.is_empty() {
            return range;
        }
        let overscan = self.options.overscan;
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = cmp::min(self.options.count, range.end_index.saturating_add(overscan));
        range
    }

    /// Calls `f` for every windowed row, in ascending index order.
    ///
    /// Entries are contiguous: each entry starts where the previous one ends. Start offsets are
    /// produced by one prefix-sum query plus a running sum, so iteration allocates nothing.
    pub fn for_each_entry(&self, f: impl FnMut(WindowEntry)) {
        self.for_each_entry_for(self.scroll_offset, self.viewport, f);
    }

    pub fn for_each_entry_for(
        &self,
        scroll_offset: u64,
        viewport: u32,
        mut f: impl FnMut(WindowEntry),
    ) {
        let range = self.window_range_for(scroll_offset, viewport);
        if range.is_empty() {
            return;
        }

        let mut start = self.start_of(range.start_index);
        for index in range.start_index..range.end_index {
            let size = self.sizes[index];
            f(WindowEntry { index, start, size });
            start = start.saturating_add(size as u64);
        }
    }

    /// Collects windowed rows into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_entry`]; reuse the buffer across frames to
    /// avoid reallocating.
    pub fn collect_entries(&self, out: &mut Vec<WindowEntry>) {
        self.collect_entries_for(self.scroll_offset, self.viewport, out);
    }

    pub fn collect_entries_for(
        &self,
        scroll_offset: u64,
        viewport: u32,
        out: &mut Vec<WindowEntry>,
    ) {
        out.clear();
        self.for_each_entry_for(scroll_offset, viewport, |entry| out.push(entry));
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.start_of(index))
    }

    pub fn row_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn row_end(&self, index: usize) -> Option<u64> {
        let start = self.row_start(index)?;
        let size = self.row_size(index)? as u64;
        Some(start.saturating_add(size))
    }

    /// Returns the row covering `offset`, clamped to the last row for offsets past the end.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        Some(self.sums.lower_bound(offset).min(count - 1))
    }

    pub fn entry_at_offset(&self, offset: u64) -> Option<WindowEntry> {
        let index = self.index_at_offset(offset)?;
        Some(self.entry(index))
    }

    /// Scrolls so that `index` lands at the given alignment (no animation).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Computes the clamped scroll offset that places `index` at the given alignment.
    ///
    /// `Align::Auto` keeps the current offset when the row is already fully visible, and
    /// otherwise scrolls to the nearest edge.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let entry = self.entry(index);
        let view = self.viewport as u64;

        let target = match align {
            Align::Start => entry.start,
            Align::End => entry.end().saturating_sub(view),
            Align::Center => {
                let center = entry.start.saturating_add(entry.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if entry.start >= cur && entry.end() <= cur_end {
                    cur
                } else if entry.start < cur {
                    entry.start
                } else {
                    entry.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    fn entry(&self, index: usize) -> WindowEntry {
        WindowEntry {
            index,
            start: self.start_of(index),
            size: self.sizes[index],
        }
    }

    fn start_of(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    fn rebuild_from_estimates(&mut self) {
        let count = self.options.count;
        self.sizes.clear();
        self.measured.clear();
        self.sizes.reserve_exact(count);
        self.measured.reserve_exact(count);
        for i in 0..count {
            self.sizes.push((self.options.estimate_size)(i));
            self.measured.push(false);
        }
        self.sums = PrefixSums::from_sizes(&self.sizes);
    }
}
