use alloc::sync::{Arc, Weak};

/// Callbacks a host screen/controller can register to observe the list.
pub trait SnapListener: Send + Sync {
    /// An auto-snap resolved a new target item.
    fn on_position_change(&self, index: usize);

    /// A raw scroll step happened. Fired on every scroll delta, independent of snapping.
    fn on_scroll(&self, dx: i32, dy: i32);
}

/// A non-owning registration slot for at most one [`SnapListener`].
///
/// The slot holds a `Weak` reference so registering a listener never extends the lifetime of
/// the host screen/controller behind it. Dispatch upgrades per call and is a silent no-op
/// once the listener has been dropped; unregistering explicitly via [`ListenerSlot::clear`]
/// is optional but releases the slot immediately.
#[derive(Clone, Default)]
pub struct ListenerSlot {
    inner: Option<Weak<dyn SnapListener>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`, replacing any prior registration.
    pub fn set(&mut self, listener: &Arc<dyn SnapListener>) {
        self.inner = Some(Arc::downgrade(listener));
    }

    pub fn clear(&mut self) {
        self.inner = None;
    }

    /// The live listener, if one is registered and still alive.
    pub fn get(&self) -> Option<Arc<dyn SnapListener>> {
        self.inner.as_ref().and_then(Weak::upgrade)
    }

    pub fn notify_position_change(&self, index: usize) {
        if let Some(listener) = self.get() {
            listener.on_position_change(index);
        }
    }

    pub fn notify_scroll(&self, dx: i32, dy: i32) {
        if let Some(listener) = self.get() {
            listener.on_scroll(dx, dy);
        }
    }
}

impl core::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match &self.inner {
            Some(weak) if weak.strong_count() > 0 => "live",
            Some(_) => "dropped",
            None => "empty",
        };
        f.debug_tuple("ListenerSlot").field(&state).finish()
    }
}
