use crate::{Anchor, Orientation};

/// Minimum fling velocity (in the host's velocity units) that escapes auto-snap.
pub const DEFAULT_FLING_THRESHOLD: i32 = 1000;

/// Configuration for [`crate::Snapper`].
///
/// All fields are plain values; construct with [`SnapOptions::new`] and adjust with the
/// `with_*` builders, or mutate through the [`crate::Snapper`] setters after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapOptions {
    pub orientation: Orientation,

    /// The viewport point a view should snap to: the start, center, or end.
    pub anchor: Anchor,

    /// Smooth-scroll speed in milliseconds per physical inch.
    ///
    /// Non-positive means "use the built-in default" ([`crate::MILLISECONDS_PER_INCH`]).
    pub scroll_speed: f32,

    /// Flings slower than this along the scroll axis are suppressed and replaced by a snap.
    pub fling_threshold: i32,

    /// Display density in dots per inch, used to convert `scroll_speed` into a per-pixel
    /// duration. Hosts should set the real display value; 160 is the baseline density.
    pub density_dpi: f32,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            anchor: Anchor::Center,
            scroll_speed: -1.0,
            fling_threshold: DEFAULT_FLING_THRESHOLD,
            density_dpi: 160.0,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_scroll_speed(mut self, scroll_speed: f32) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    pub fn with_fling_threshold(mut self, fling_threshold: i32) -> Self {
        self.fling_threshold = fling_threshold;
        self
    }

    pub fn with_density_dpi(mut self, density_dpi: f32) -> Self {
        self.density_dpi = density_dpi;
        self
    }
}
