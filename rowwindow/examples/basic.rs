// Example: windowing a large fixed-size list.
use rowwindow::{Align, RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::new(WindowOptions::fixed(1_000_000, 1).with_initial_viewport(10));
    w.set_scroll_offset_clamped(123_456);

    let mut entries = Vec::new();
    w.collect_entries(&mut entries);
    println!("total_size={}", w.total_size());
    println!("window_range={:?}", w.window_range());
    println!("first_entry={:?}", entries.first());

    let off = w.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: offset={off}");
}
