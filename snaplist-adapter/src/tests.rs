use crate::*;

use alloc::sync::Arc;
use std::sync::Mutex;
use std::vec;
use std::vec::Vec;

use snaplist::{Anchor, Bounds, Orientation, ScrollPhase, SliceLayout, SnapOptions};

#[derive(Default)]
struct Recorder {
    positions: Mutex<Vec<usize>>,
    scrolls: Mutex<Vec<(i32, i32)>>,
}

impl SnapListener for Recorder {
    fn on_position_change(&self, index: usize) {
        self.positions.lock().unwrap().push(index);
    }

    fn on_scroll(&self, dx: i32, dy: i32) {
        self.scrolls.lock().unwrap().push((dx, dy));
    }
}

fn viewport() -> Bounds {
    Bounds::new(0, 0, 400, 600)
}

#[test]
fn listener_receives_scroll_and_position_callbacks() {
    let mut c = SnapController::new(SnapOptions::new());
    let recorder = Arc::new(Recorder::default());
    let listener: Arc<dyn SnapListener> = recorder.clone();
    c.set_listener(&listener);

    c.on_scrolled(0, 5);
    c.on_scrolled(0, -2);

    // Item center 100 vs viewport center 300.
    let items = [Bounds::new(0, 50, 400, 150)];
    let layout = SliceLayout::new(viewport(), 4, &items);
    let target = c
        .on_scroll_state_changed(ScrollPhase::Idle, 0, &layout)
        .unwrap();
    assert_eq!(target.index, 4);
    assert_eq!(target.distance, 200);

    assert_eq!(*recorder.scrolls.lock().unwrap(), vec![(0, 5), (0, -2)]);
    assert_eq!(*recorder.positions.lock().unwrap(), vec![4]);
}

#[test]
fn dropped_listener_is_silently_unregistered() {
    let mut c = SnapController::new(SnapOptions::new());
    let recorder = Arc::new(Recorder::default());
    let listener: Arc<dyn SnapListener> = recorder.clone();
    c.set_listener(&listener);
    assert!(c.listener().is_some());

    drop(listener);
    drop(recorder);
    assert!(c.listener().is_none());

    // Dispatch against a dead listener is a no-op, not an error.
    c.on_scrolled(1, 0);
    let items = [Bounds::new(0, 250, 400, 350)];
    let layout = SliceLayout::new(viewport(), 0, &items);
    c.on_scroll_state_changed(ScrollPhase::Idle, 0, &layout);
}

#[test]
fn set_listener_replaces_prior_registration() {
    let mut c = SnapController::new(SnapOptions::new());
    let first = Arc::new(Recorder::default());
    let second = Arc::new(Recorder::default());
    let l1: Arc<dyn SnapListener> = first.clone();
    let l2: Arc<dyn SnapListener> = second.clone();

    c.set_listener(&l1);
    c.set_listener(&l2);
    c.on_scrolled(0, 7);

    assert!(first.scrolls.lock().unwrap().is_empty());
    assert_eq!(*second.scrolls.lock().unwrap(), vec![(0, 7)]);

    c.clear_listener();
    c.on_scrolled(0, 8);
    assert_eq!(second.scrolls.lock().unwrap().len(), 1);
}

#[test]
fn idle_snap_animates_to_the_resolved_distance() {
    let mut c = SnapController::new(SnapOptions::new());
    let items = [Bounds::new(0, 50, 400, 150)];
    let layout = SliceLayout::new(viewport(), 0, &items);

    let target = c
        .on_scroll_state_changed(ScrollPhase::Idle, 0, &layout)
        .unwrap();
    assert_eq!(target.distance, 200);
    assert!(c.is_animating());

    // Default speed: 100 ms/inch at 160 dpi → 0.625 ms/px → 125 ms for 200 px.
    let mut total = 0i64;
    let mut last = 0i64;
    for now_ms in [0u64, 30, 60, 90, 120, 125, 140] {
        if let Some(delta) = c.tick(now_ms, &layout) {
            assert!(delta >= 0, "snap must not overshoot backwards");
            total += delta;
            assert!(total >= last);
            last = total;
        }
    }
    assert_eq!(total, 200);
    assert!(!c.is_animating());
    assert_eq!(c.tick(150, &layout), None);
}

#[test]
fn snap_distance_can_be_negative() {
    let mut c = SnapController::new(SnapOptions::new());
    // Item center 400 is below the viewport center; content must move up.
    let items = [Bounds::new(0, 350, 400, 450)];
    let layout = SliceLayout::new(viewport(), 0, &items);

    let target = c
        .on_scroll_state_changed(ScrollPhase::Idle, 0, &layout)
        .unwrap();
    assert_eq!(target.distance, -100);

    let mut total = 0i64;
    for now_ms in [0u64, 40, 80, 120] {
        if let Some(delta) = c.tick(now_ms, &layout) {
            assert!(delta <= 0);
            total += delta;
        }
    }
    assert_eq!(total, -100);
}

#[test]
fn gentle_fling_is_consumed_and_snaps() {
    let mut c = SnapController::new(SnapOptions::new());
    let recorder = Arc::new(Recorder::default());
    let listener: Arc<dyn SnapListener> = recorder.clone();
    c.set_listener(&listener);

    let items = [Bounds::new(0, 0, 400, 100)];
    let layout = SliceLayout::new(viewport(), 2, &items);

    assert!(c.on_fling(0, 999, 0, &layout));
    assert!(c.is_animating());
    assert_eq!(*recorder.positions.lock().unwrap(), vec![2]);
}

#[test]
fn fast_fling_passes_through_and_cancels_the_snap() {
    let mut c = SnapController::new(SnapOptions::new());
    let items = [Bounds::new(0, 0, 400, 100)];
    let layout = SliceLayout::new(viewport(), 2, &items);

    assert!(c.on_fling(0, 500, 0, &layout));
    assert!(c.is_animating());

    // A real fling takes over; the pending snap must not keep fighting it.
    assert!(!c.on_fling(0, 4000, 10, &layout));
    assert!(!c.is_animating());
}

#[test]
fn empty_window_snaps_nothing_and_notifies_nobody() {
    let mut c = SnapController::new(SnapOptions::new());
    let recorder = Arc::new(Recorder::default());
    let listener: Arc<dyn SnapListener> = recorder.clone();
    c.set_listener(&listener);

    let layout = SliceLayout::new(viewport(), 0, &[]);
    assert_eq!(c.on_scroll_state_changed(ScrollPhase::Idle, 0, &layout), None);
    assert!(!c.is_animating());

    // Gentle fling over an empty list is still consumed, but nothing happens.
    assert!(c.on_fling(0, 10, 0, &layout));
    assert!(!c.is_animating());
    assert!(recorder.positions.lock().unwrap().is_empty());
}

#[test]
fn already_aligned_target_skips_the_animation() {
    let mut c = SnapController::new(SnapOptions::new());
    let items = [Bounds::new(0, 250, 400, 350)]; // center == viewport center
    let layout = SliceLayout::new(viewport(), 0, &items);

    let target = c
        .on_scroll_state_changed(ScrollPhase::Idle, 0, &layout)
        .unwrap();
    assert_eq!(target.distance, 0);
    assert!(!c.is_animating());
}

#[test]
fn scroll_to_position_defers_until_the_next_tick() {
    let mut c = SnapController::new(SnapOptions::new());

    c.scroll_to_position(7);
    assert!(!c.is_animating(), "command must not run before the tick");

    // The host jumped; item 7 now sits at the top. The animation must read this layout.
    let after = [Bounds::new(0, 0, 400, 100)];
    let layout_after = SliceLayout::new(viewport(), 7, &after);

    let mut total = 0i64;
    let mut now_ms = 0u64;
    loop {
        match c.tick(now_ms, &layout_after) {
            Some(delta) => total += delta,
            None => break,
        }
        now_ms += 16;
    }
    // Post-jump center 50 → viewport center 300.
    assert_eq!(total, 250);
}

#[test]
fn scroll_to_position_with_unlaid_out_index_is_a_noop() {
    let mut c = SnapController::new(SnapOptions::new());
    let items = [Bounds::new(0, 0, 400, 100)];
    let layout = SliceLayout::new(viewport(), 0, &items);

    c.scroll_to_position(99);
    assert_eq!(c.tick(0, &layout), None);
    assert!(!c.is_animating());
}

#[test]
fn faster_scroll_speed_shortens_the_animation() {
    let options = SnapOptions::new()
        .with_orientation(Orientation::Horizontal)
        .with_anchor(Anchor::Start)
        .with_scroll_speed(16.0); // 0.1 ms/px at 160 dpi
    let mut c = SnapController::new(options);

    let items = [Bounds::new(300, 0, 400, 100)];
    let layout = SliceLayout::new(Bounds::new(0, 0, 600, 100), 0, &items);

    let target = c
        .on_scroll_state_changed(ScrollPhase::Idle, 0, &layout)
        .unwrap();
    assert_eq!(target.distance, -300);

    // 300 px at 0.1 ms/px → done within 30 ms.
    c.tick(30, &layout);
    assert!(!c.is_animating());
}

#[test]
fn tween_sample_is_clamped_and_retargets_from_current_value() {
    let tween = Tween::new(0, 100, 0, 50, Easing::Linear);
    assert_eq!(tween.sample(0), 0);
    assert_eq!(tween.sample(25), 50);
    assert_eq!(tween.sample(50), 100);
    assert_eq!(tween.sample(1_000), 100);
    assert!(tween.is_done(50));

    let mut tween = tween;
    tween.retarget(25, -100, 50);
    assert_eq!(tween.from, 50);
    assert_eq!(tween.to, -100);
    assert_eq!(tween.sample(75), -100);

    // Zero-duration tweens are bumped to 1 ms instead of dividing by zero.
    let instant = Tween::new(0, 10, 5, 0, Easing::SmoothStep);
    assert_eq!(instant.duration_ms, 1);
    assert_eq!(instant.sample(6), 10);
}
