use crate::{Anchor, Bounds, Orientation};

/// Built-in smooth-scroll speed, used when no explicit speed is configured.
pub const MILLISECONDS_PER_INCH: f32 = 100.0;

/// Signed pixel offset that moves an item into anchor alignment.
///
/// `view_start`/`view_end` are the item's current edges along the scroll axis and
/// `box_start`/`box_end` the viewport's. The result is the translation to apply to the item:
/// start mode aligns leading edges, end mode trailing edges, and center mode the truncated
/// midpoints.
pub fn dt_to_fit(
    view_start: i32,
    view_end: i32,
    box_start: i32,
    box_end: i32,
    anchor: Anchor,
) -> i32 {
    match anchor {
        Anchor::Start => box_start - view_start,
        Anchor::End => box_end - view_end,
        Anchor::Center => ((box_start + box_end) / 2) - ((view_start + view_end) / 2),
    }
}

/// [`dt_to_fit`] over full bounds, picking the edges for the given orientation.
pub fn dt_to_fit_bounds(
    item: Bounds,
    viewport: Bounds,
    orientation: Orientation,
    anchor: Anchor,
) -> i32 {
    dt_to_fit(
        item.main_start(orientation),
        item.main_end(orientation),
        viewport.main_start(orientation),
        viewport.main_end(orientation),
        anchor,
    )
}

/// Converts a "milliseconds per inch" speed into "milliseconds per pixel".
///
/// Non-positive `scroll_speed` selects the built-in [`MILLISECONDS_PER_INCH`] default.
pub fn speed_per_pixel(scroll_speed: f32, density_dpi: f32) -> f32 {
    let ms_per_inch = if scroll_speed > 0.0 {
        scroll_speed
    } else {
        MILLISECONDS_PER_INCH
    };
    ms_per_inch / density_dpi
}

/// Duration in milliseconds for a scroll of `dx` pixels, rounded up so short scrolls still
/// animate for at least a whole millisecond.
pub fn time_for_scrolling(dx: i32, ms_per_pixel: f32) -> u64 {
    let exact = dx.unsigned_abs() as f32 * ms_per_pixel;
    // f32::ceil is unavailable without std.
    let whole = exact as u64;
    if (whole as f32) < exact { whole + 1 } else { whole }
}
