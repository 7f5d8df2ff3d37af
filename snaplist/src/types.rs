/// The scroll axis of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Maps a host-provided integer constant to an orientation.
    ///
    /// Unrecognized values fall back to [`Orientation::Vertical`]; bad configuration must
    /// degrade, never fail.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Horizontal,
            _ => Self::Vertical,
        }
    }
}

/// The viewport-relative point that the nearest item is aligned to after scrolling settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    #[default]
    Center,
    Start,
    End,
}

impl Anchor {
    /// Maps a host-provided integer constant to an anchor mode.
    ///
    /// Unrecognized values fall back to [`Anchor::Center`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Start,
            2 => Self::End,
            _ => Self::Center,
        }
    }
}

/// The externally observable scroll state of the list.
///
/// Hosts with a separate "dragging" state report it as [`ScrollPhase::Settling`]; the engine
/// only cares whether motion has stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    /// No motion; snap evaluation fires on this state.
    #[default]
    Idle,
    /// User input is active or the list is still decelerating.
    Settling,
}

impl ScrollPhase {
    /// Maps a host-provided scroll-state constant (`0` = idle) to a phase.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Idle,
            _ => Self::Settling,
        }
    }
}

/// An on-screen box in the host's pixel space.
///
/// Coordinates are relative to the viewport's coordinate space, so items partially scrolled
/// off-screen have negative `left`/`top`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Leading edge along the scroll axis (top for vertical lists, left for horizontal).
    pub fn main_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    /// Trailing edge along the scroll axis (bottom for vertical lists, right for horizontal).
    pub fn main_end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    pub fn main_size(&self, orientation: Orientation) -> i32 {
        self.main_end(orientation) - self.main_start(orientation)
    }

    /// Midpoint along the scroll axis. Truncating division; sub-pixel precision is not needed
    /// for a pixel delta.
    pub fn main_center(&self, orientation: Orientation) -> i32 {
        self.main_start(orientation) + self.main_size(orientation) / 2
    }
}

/// The contiguous range of item indices currently rendered on screen.
///
/// `end_index` is exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// The result of a snap resolution: the nearest visible item and how far it is from the anchor.
///
/// `distance` is the viewport anchor coordinate minus the item anchor coordinate; translating
/// the item by `distance` pixels brings it into alignment. Index and distance come from a
/// single scan so they can never disagree about which item is nearest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    pub index: usize,
    pub distance: i32,
}
