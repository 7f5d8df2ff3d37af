use crate::{Anchor, Bounds, Orientation, SnapLayout, SnapTarget, VisibleRange};

/// The viewport's anchor coordinate for the given orientation and anchor mode.
///
/// Start is the viewport's leading edge, End its trailing edge, Center the truncated midpoint.
pub fn viewport_anchor(viewport: Bounds, orientation: Orientation, anchor: Anchor) -> i32 {
    match anchor {
        Anchor::Start => viewport.main_start(orientation),
        Anchor::End => viewport.main_end(orientation),
        Anchor::Center => viewport.main_center(orientation),
    }
}

/// An item's anchor coordinate: its start (top/left), end (bottom/right), or center.
pub fn item_anchor(bounds: Bounds, orientation: Orientation, anchor: Anchor) -> i32 {
    match anchor {
        Anchor::Start => bounds.main_start(orientation),
        Anchor::End => bounds.main_end(orientation),
        Anchor::Center => bounds.main_center(orientation),
    }
}

/// Finds the visible item whose anchor coordinate is nearest `viewport_anchor`.
///
/// `item_anchor_at` reads the anchor coordinate of the item at a given index; returning `None`
/// skips that index (no laid-out view). Comparison is strict, so ties resolve to the lowest
/// index. Returns `None` when the window is empty or no index yields a coordinate; the
/// caller must treat that as "no snap" and skip both the animation and any listener dispatch.
pub fn snap_target(
    range: VisibleRange,
    viewport_anchor: i32,
    mut item_anchor_at: impl FnMut(usize) -> Option<i32>,
) -> Option<SnapTarget> {
    let mut nearest: Option<SnapTarget> = None;

    for index in range.start_index..range.end_index {
        let Some(coord) = item_anchor_at(index) else {
            continue;
        };
        let distance = viewport_anchor - coord;
        let closer = match nearest {
            Some(best) => distance.abs() < best.distance.abs(),
            None => true,
        };
        if closer {
            nearest = Some(SnapTarget { index, distance });
        }
    }

    nearest
}

/// Resolves the snap target for a layout with the given orientation and anchor mode.
pub fn resolve(
    layout: &impl SnapLayout,
    orientation: Orientation,
    anchor: Anchor,
) -> Option<SnapTarget> {
    let parent = viewport_anchor(layout.viewport(), orientation, anchor);
    snap_target(layout.visible_range(), parent, |index| {
        layout
            .item_bounds(index)
            .map(|b| item_anchor(b, orientation, anchor))
    })
}
