use alloc::collections::VecDeque;
use alloc::sync::Arc;

use snaplist::{
    FlingOutcome, ScrollPhase, SnapLayout, SnapOptions, SnapTarget, Snapper, time_for_scrolling,
};

use crate::{Easing, ListenerSlot, SnapListener, Tween};

/// Deferred work executed on the next tick, in submission order.
#[derive(Clone, Copy, Debug)]
enum Command {
    SmoothScrollTo(usize),
}

/// A framework-neutral controller that wraps a [`Snapper`] and provides the full snapping
/// widget workflow: listener registration, fling gating, idle-triggered snaps, and the snap
/// animation itself.
///
/// This type does not hold any UI objects. A host drives it by calling:
/// - `on_scrolled` / `on_scroll_state_changed` / `on_fling` when UI events occur
/// - `tick(now_ms, layout)` each frame; the returned delta is the translation to apply to
///   the list content this frame
///
/// Everything runs on the host's single UI thread; deferred work (`scroll_to_position`) is
/// queued and executed at the top of the next `tick`, after the host has applied its
/// synchronous position change.
#[derive(Clone, Debug)]
pub struct SnapController {
    snapper: Snapper,
    listener: ListenerSlot,
    easing: Easing,
    tween: Option<Tween>,
    applied: i64,
    queue: VecDeque<Command>,
}

impl SnapController {
    pub fn new(options: SnapOptions) -> Self {
        Self::from_snapper(Snapper::new(options))
    }

    pub fn from_snapper(snapper: Snapper) -> Self {
        Self {
            snapper,
            listener: ListenerSlot::new(),
            easing: Easing::SmoothStep,
            tween: None,
            applied: 0,
            queue: VecDeque::new(),
        }
    }

    pub fn snapper(&self) -> &Snapper {
        &self.snapper
    }

    pub fn snapper_mut(&mut self) -> &mut Snapper {
        &mut self.snapper
    }

    /// Registers a listener, replacing any prior registration.
    ///
    /// The controller keeps only a weak handle; dropping the listener's last `Arc` silently
    /// unregisters it.
    pub fn set_listener(&mut self, listener: &Arc<dyn SnapListener>) {
        self.listener.set(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener.clear();
    }

    pub fn listener(&self) -> Option<Arc<dyn SnapListener>> {
        self.listener.get()
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops the snap animation in place.
    ///
    /// Hosts should call this when user input takes over mid-animation (touch-down, wheel);
    /// the next idle report will re-snap from wherever the list stopped.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.applied = 0;
    }

    /// Call on every raw scroll step. Forwards the delta to the listener unconditionally,
    /// independent of snapping.
    pub fn on_scrolled(&mut self, dx: i32, dy: i32) {
        self.listener.notify_scroll(dx, dy);
    }

    /// Call when the host's scroll state changes.
    ///
    /// A transition to [`ScrollPhase::Idle`] resolves the nearest item, starts the snap
    /// animation toward it, and notifies the listener. An empty visible window resolves to
    /// nothing and is a complete no-op.
    pub fn on_scroll_state_changed(
        &mut self,
        phase: ScrollPhase,
        now_ms: u64,
        layout: &impl SnapLayout,
    ) -> Option<SnapTarget> {
        let target = self.snapper.handle_scroll_state(phase, layout)?;
        self.begin_snap(target.distance, now_ms);
        self.listener.notify_position_change(target.index);
        Some(target)
    }

    /// Call when the host reports a fling gesture.
    ///
    /// Returns `true` when the controller consumed the fling (the host must then suppress
    /// its native fling). Below-threshold flings snap immediately; at or above the
    /// threshold the native fling proceeds and the later idle report snaps.
    pub fn on_fling(
        &mut self,
        velocity_x: i32,
        velocity_y: i32,
        now_ms: u64,
        layout: &impl SnapLayout,
    ) -> bool {
        match self.snapper.handle_fling(velocity_x, velocity_y, layout) {
            FlingOutcome::Snapped(target) => {
                self.begin_snap(target.distance, now_ms);
                self.listener.notify_position_change(target.index);
                true
            }
            FlingOutcome::Suppressed => true,
            FlingOutcome::Native => {
                self.cancel_animation();
                false
            }
        }
    }

    /// Schedules a smooth scroll to `index` for the next tick.
    ///
    /// The host performs its synchronous position jump itself; because the command only runs
    /// at the top of the next `tick`, the animation reads layout from *after* that jump.
    pub fn scroll_to_position(&mut self, index: usize) {
        self.queue.push_back(Command::SmoothScrollTo(index));
    }

    /// Advances the controller.
    ///
    /// Drains deferred commands, then samples the active snap animation. Returns the
    /// translation delta the host applies to the list content this frame, or `None` when
    /// nothing is animating.
    pub fn tick(&mut self, now_ms: u64, layout: &impl SnapLayout) -> Option<i64> {
        while let Some(command) = self.queue.pop_front() {
            match command {
                Command::SmoothScrollTo(index) => {
                    if let Some(bounds) = layout.item_bounds(index) {
                        let distance = self.snapper.scroll_distance(bounds, layout.viewport());
                        self.begin_snap(distance, now_ms);
                    }
                }
            }
        }

        let tween = self.tween?;
        let sample = tween.sample(now_ms);
        let delta = sample - self.applied;
        self.applied = sample;

        if tween.is_done(now_ms) {
            self.cancel_animation();
        }

        Some(delta)
    }

    /// Starts (or restarts) the snap animation over a fresh translation.
    fn begin_snap(&mut self, distance: i32, now_ms: u64) {
        if distance == 0 {
            self.cancel_animation();
            return;
        }
        let duration_ms = time_for_scrolling(distance, self.snapper.ms_per_pixel());
        self.tween = Some(Tween::new(0, distance as i64, now_ms, duration_ms, self.easing));
        self.applied = 0;
    }
}
