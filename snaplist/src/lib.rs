//! A headless snap-alignment engine for anchored scrollable lists.
//!
//! For adapter-level utilities (listeners, snap animations), see the `snaplist-adapter` crate.
//!
//! After the user stops scrolling, or flings too gently, a snapping list animates so that the
//! item nearest a configured anchor point (start, center, or end of the viewport) aligns with
//! that anchor. This crate implements the math and state for that behavior: nearest-item
//! resolution over the visible window, per-anchor scroll-distance calculation, and the
//! speed override that converts a "milliseconds per inch" setting into per-pixel durations.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport bounds and per-item on-screen bounds (via [`SnapLayout`])
//! - scroll/fling/idle events from its input pipeline
//! - an animation pump that applies the computed scroll deltas
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod options;
mod resolver;
mod scroller;
mod snapper;
mod types;


pub use layout::{SliceLayout, SnapLayout};
pub use options::{DEFAULT_FLING_THRESHOLD, SnapOptions};
pub use resolver::{item_anchor, resolve, snap_target, viewport_anchor};
pub use scroller::{
    MILLISECONDS_PER_INCH, dt_to_fit, dt_to_fit_bounds, speed_per_pixel, time_for_scrolling,
};
pub use snapper::{FlingOutcome, Snapper};
pub use types::{Anchor, Bounds, Orientation, ScrollPhase, SnapTarget, VisibleRange};
