//! Adapter utilities for the `snaplist` crate.
//!
//! The `snaplist` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed when wiring it to a host:
//!
//! - Listener registration (non-owning, so the engine never extends a host controller's
//!   lifetime)
//! - Tween-based snap animations driven by a per-frame `tick`
//! - A controller that turns host scroll/fling/idle callbacks into snap behavior
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod listener;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::SnapController;
pub use listener::{ListenerSlot, SnapListener};
pub use tween::{Easing, Tween};
