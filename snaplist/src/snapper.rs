use crate::{
    Anchor, Bounds, Orientation, ScrollPhase, SnapLayout, SnapOptions, SnapTarget, resolver,
    scroller,
};

/// What to do with a fling gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlingOutcome {
    /// Fling suppressed; animate to this target and report it to any listener.
    Snapped(SnapTarget),
    /// Fling suppressed, but nothing is visible to snap to. No-op.
    Suppressed,
    /// Fast enough for a native fling; let it run, idle-state snapping fires when it settles.
    Native,
}

/// A headless snap engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; item geometry comes in through [`SnapLayout`].
/// - The host drives it from its scroll-state and fling callbacks.
/// - Animation is left to the caller, sized by [`Snapper::scroll_distance`] and timed by
///   [`Snapper::ms_per_pixel`].
///
/// For listener registration and a tick-driven animation workflow, see the
/// `snaplist-adapter` crate.
#[derive(Clone, Copy, Debug)]
pub struct Snapper {
    options: SnapOptions,
    phase: ScrollPhase,
}

impl Snapper {
    pub fn new(options: SnapOptions) -> Self {
        sdebug!(
            orientation = ?options.orientation,
            anchor = ?options.anchor,
            fling_threshold = options.fling_threshold,
            "Snapper::new"
        );
        Self {
            options,
            phase: ScrollPhase::Idle,
        }
    }

    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SnapOptions) {
        strace!(
            orientation = ?options.orientation,
            anchor = ?options.anchor,
            "Snapper::set_options"
        );
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SnapOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        self.options.orientation = orientation;
    }

    pub fn anchor(&self) -> Anchor {
        self.options.anchor
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.options.anchor == anchor {
            return;
        }
        self.options.anchor = anchor;
    }

    pub fn scroll_speed(&self) -> f32 {
        self.options.scroll_speed
    }

    pub fn set_scroll_speed(&mut self, scroll_speed: f32) {
        self.options.scroll_speed = scroll_speed;
    }

    pub fn fling_threshold(&self) -> i32 {
        self.options.fling_threshold
    }

    pub fn set_fling_threshold(&mut self, fling_threshold: i32) {
        self.options.fling_threshold = fling_threshold;
    }

    pub fn density_dpi(&self) -> f32 {
        self.options.density_dpi
    }

    pub fn set_density_dpi(&mut self, density_dpi: f32) {
        self.options.density_dpi = density_dpi;
    }

    /// The current scroll phase, as last reported by the host.
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// The animation speed override: milliseconds per pixel for the current configuration.
    pub fn ms_per_pixel(&self) -> f32 {
        scroller::speed_per_pixel(self.options.scroll_speed, self.options.density_dpi)
    }

    /// Resolves the visible item nearest the configured anchor, or `None` when nothing is
    /// visible.
    pub fn snap_target(&self, layout: &impl SnapLayout) -> Option<SnapTarget> {
        resolver::resolve(layout, self.options.orientation, self.options.anchor)
    }

    /// The translation that brings `item` into anchor alignment within `viewport`.
    pub fn scroll_distance(&self, item: Bounds, viewport: Bounds) -> i32 {
        scroller::dt_to_fit_bounds(item, viewport, self.options.orientation, self.options.anchor)
    }

    /// Records a scroll-state report from the host.
    ///
    /// A report of [`ScrollPhase::Idle`] runs the resolver and returns the target to animate
    /// to; an empty visible window yields `None` and the caller must no-op.
    pub fn handle_scroll_state(
        &mut self,
        phase: ScrollPhase,
        layout: &impl SnapLayout,
    ) -> Option<SnapTarget> {
        self.phase = phase;
        if phase != ScrollPhase::Idle {
            return None;
        }
        let resolved = self.snap_target(layout);
        strace!(resolved = ?resolved, "Snapper::handle_scroll_state idle");
        resolved
    }

    /// Gates a fling gesture.
    ///
    /// The velocity component along the configured orientation is compared against the fling
    /// threshold: slower flings are suppressed and resolved to a snap immediately (a would-be
    /// idle state); faster ones proceed natively and the phase is marked settling so that the
    /// eventual idle report triggers the snap.
    pub fn handle_fling(
        &mut self,
        velocity_x: i32,
        velocity_y: i32,
        layout: &impl SnapLayout,
    ) -> FlingOutcome {
        let velocity = match self.options.orientation {
            Orientation::Vertical => velocity_y,
            Orientation::Horizontal => velocity_x,
        };
        if velocity.checked_abs().unwrap_or(i32::MAX) < self.options.fling_threshold {
            self.phase = ScrollPhase::Idle;
            let outcome = match self.snap_target(layout) {
                Some(target) => FlingOutcome::Snapped(target),
                None => FlingOutcome::Suppressed,
            };
            strace!(velocity, outcome = ?outcome, "Snapper::handle_fling suppressed");
            outcome
        } else {
            self.phase = ScrollPhase::Settling;
            FlingOutcome::Native
        }
    }
}

impl Default for Snapper {
    fn default() -> Self {
        Self::new(SnapOptions::default())
    }
}
