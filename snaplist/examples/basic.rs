// Example: minimal usage, resolving snap targets over a synthetic visible window.
use snaplist::{Anchor, Bounds, ScrollPhase, SliceLayout, SnapOptions, Snapper};

fn main() {
    // Five 100px rows in a 600px viewport, the first row scrolled 20px off the top.
    let viewport = Bounds::new(0, 0, 400, 600);
    let rows: Vec<Bounds> = (0..5)
        .map(|i| Bounds::new(0, -20 + i * 100, 400, 80 + i * 100))
        .collect();
    let layout = SliceLayout::new(viewport, 10, &rows);

    let mut snapper = Snapper::new(SnapOptions::new());
    for anchor in [Anchor::Start, Anchor::Center, Anchor::End] {
        snapper.set_anchor(anchor);
        let target = snapper.handle_scroll_state(ScrollPhase::Idle, &layout);
        println!("{anchor:?}: {target:?}");
    }

    // A gentle fling is replaced by a snap; a fast one scrolls natively.
    println!("fling at 400: {:?}", snapper.handle_fling(0, 400, &layout));
    println!("fling at 2000: {:?}", snapper.handle_fling(0, 2000, &layout));
    println!("speed override: {} ms/px", snapper.ms_per_pixel());
}
