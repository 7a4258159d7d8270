// Example: dynamic measurement with scroll anchoring.
use rowwindow::{RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::new(WindowOptions::new(100, |_| 10).with_initial_viewport(30));
    w.set_scroll_offset_clamped(200);

    println!(
        "before: off={} total={} range={:?}",
        w.scroll_offset(),
        w.total_size(),
        w.window_range()
    );

    // A row above the viewport grows; anchoring shifts the offset so the rows on screen stay put.
    let applied = w.measure_anchored(0, 30);
    println!(
        "measure_anchored(0): applied_delta={applied} off={} total={}",
        w.scroll_offset(),
        w.total_size()
    );

    // Plain measure leaves the scroll offset alone.
    w.measure(1, 50);
    println!(
        "measure(1): off={} total={}",
        w.scroll_offset(),
        w.total_size()
    );
}
