// Example: a horizontal date-strip picker, simulated frame by frame.
//
// 31 day cells scroll sideways; the cell nearest the viewport center snaps into
// place after a drag or a gentle fling. The first and last cells get edge padding
// so they can reach the center too.
use std::sync::Arc;

use snaplist::{Anchor, Bounds, Orientation, ScrollPhase, SliceLayout, SnapOptions};
use snaplist_adapter::{SnapController, SnapListener};

const DAY_COUNT: usize = 31;
const CELL: i32 = 80;
const VIEW: i32 = 360;
/// Lets the first and last cells reach the center anchor.
const EDGE_PAD: i32 = (VIEW / 2) - (CELL / 2);

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// January 2017 started on a Sunday.
fn label(day: usize) -> String {
    format!("{} {}", WEEKDAYS[day % 7], day + 1)
}

fn cell_bounds(index: usize, scroll_x: i32) -> Bounds {
    let left = EDGE_PAD + index as i32 * CELL - scroll_x;
    Bounds::new(left, 0, left + CELL, 100)
}

fn visible(scroll_x: i32) -> (usize, Vec<Bounds>) {
    let mut start = None;
    let mut bounds = Vec::new();
    for i in 0..DAY_COUNT {
        let b = cell_bounds(i, scroll_x);
        if b.right > 0 && b.left < VIEW {
            start.get_or_insert(i);
            bounds.push(b);
        }
    }
    (start.unwrap_or(0), bounds)
}

struct PrintListener;

impl SnapListener for PrintListener {
    fn on_position_change(&self, index: usize) {
        println!("  -> snapped to {}", label(index));
    }

    fn on_scroll(&self, dx: i32, _dy: i32) {
        println!("  scrolled by {dx}px");
    }
}

fn main() {
    let options = SnapOptions::new()
        .with_orientation(Orientation::Horizontal)
        .with_anchor(Anchor::Center);
    let mut controller = SnapController::new(options);
    let listener: Arc<dyn SnapListener> = Arc::new(PrintListener);
    controller.set_listener(&listener);

    let mut scroll_x = 0i32;
    let mut now_ms = 0u64;

    // Drag a few cells over...
    for step in [120, 90, 40] {
        scroll_x += step;
        controller.on_scrolled(step, 0);
    }

    // ...and release with a gentle fling: it gets consumed and a snap runs instead.
    let (start, bounds) = visible(scroll_x);
    let layout = SliceLayout::new(Bounds::new(0, 0, VIEW, 100), start, &bounds);
    let consumed = controller.on_fling(320, 0, now_ms, &layout);
    println!("gentle fling consumed: {consumed}");

    while controller.is_animating() {
        now_ms += 16;
        let (start, bounds) = visible(scroll_x);
        let layout = SliceLayout::new(Bounds::new(0, 0, VIEW, 100), start, &bounds);
        if let Some(delta) = controller.tick(now_ms, &layout) {
            // A positive item translation means the content offset moves backwards.
            scroll_x -= delta as i32;
        }
    }

    // Once the animation settles, the host reports idle; the re-snap is a no-op.
    let (start, bounds) = visible(scroll_x);
    let layout = SliceLayout::new(Bounds::new(0, 0, VIEW, 100), start, &bounds);
    controller.on_scroll_state_changed(ScrollPhase::Idle, now_ms, &layout);

    // Programmatic selection: jump, then let the deferred smooth scroll center it.
    let target_day = 14;
    controller.scroll_to_position(target_day);
    scroll_x = EDGE_PAD + target_day as i32 * CELL; // the host's synchronous jump

    loop {
        now_ms += 16;
        let (start, bounds) = visible(scroll_x);
        let layout = SliceLayout::new(Bounds::new(0, 0, VIEW, 100), start, &bounds);
        match controller.tick(now_ms, &layout) {
            Some(delta) => scroll_x -= delta as i32,
            None => break,
        }
    }

    let (start, bounds) = visible(scroll_x);
    let layout = SliceLayout::new(Bounds::new(0, 0, VIEW, 100), start, &bounds);
    let centered = controller
        .snapper()
        .snap_target(&layout)
        .expect("strip is never empty");
    println!(
        "selected {} (distance {}px)",
        label(centered.index),
        centered.distance
    );
}
