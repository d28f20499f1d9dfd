//! Bounds cache and layout observation.
//!
//! Engines map pointer positions onto the board through a cached snapshot of
//! the widget's on-screen rectangle. Anything that can move or resize the
//! widget clears the snapshot; the next read measures again.
//!
//! Size changes are observed natively when the host supports it. Otherwise
//! the widget raises a synthetic `boardinput.resize` event on the document
//! body whenever it changes its own layout.

use crate::host::{DeliveryReport, EventHub, ListenerOptions};
use crate::subscription::SubscriptionHandle;
use crate::types::{EventName, Rect, Target};
use std::cell::Cell;
use std::rc::Rc;

/// Lazily measured widget rectangle.
#[derive(Debug, Default)]
pub struct BoundsCache {
    snapshot: Cell<Option<Rect>>,
    measurements: Cell<u64>,
}

impl BoundsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached rectangle, measuring with `measure` if the cache is empty.
    pub fn get_or_compute(&self, measure: impl FnOnce() -> Rect) -> Rect {
        if let Some(rect) = self.snapshot.get() {
            return rect;
        }
        let rect = measure();
        self.measurements.set(self.measurements.get() + 1);
        self.snapshot.set(Some(rect));
        rect
    }

    pub fn get(&self) -> Option<Rect> {
        self.snapshot.get()
    }

    /// Drop the snapshot without measuring again.
    pub fn clear(&self) {
        if self.snapshot.take().is_some() {
            tracing::trace!("Bounds cache cleared");
        }
    }

    pub fn is_cached(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// How many times the rectangle has been measured
    pub fn measurements(&self) -> u64 {
        self.measurements.get()
    }
}

/// How layout changes are being detected for a bound widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutObservation {
    /// Native size observation of the given element
    Native(Target),
    /// Listening for the synthetic resize event on the document body
    Synthetic,
}

/// Register layout observation and scroll/resize invalidation on `handle`.
pub fn bind_observer(
    handle: &mut SubscriptionHandle,
    bounds: &Rc<BoundsCache>,
    target: Target,
    on_resize: Option<Rc<dyn Fn()>>,
) -> LayoutObservation {
    let resized = {
        let bounds = Rc::clone(bounds);
        Rc::new(move || {
            bounds.clear();
            if let Some(hook) = &on_resize {
                hook();
            }
        })
    };

    let native = Rc::clone(&resized);
    let observation = if handle.observe_size(target, move || native()) {
        LayoutObservation::Native(target)
    } else {
        handle.listen(Target::Body, EventName::WidgetResize, ListenerOptions::PASSIVE, move |_| {
            resized()
        });
        LayoutObservation::Synthetic
    };

    let scrolled = Rc::clone(bounds);
    handle.listen(
        Target::Document,
        EventName::Scroll,
        ListenerOptions::PASSIVE_CAPTURE,
        move |_| scrolled.clear(),
    );
    let window_resized = Rc::clone(bounds);
    handle.listen(
        Target::Window,
        EventName::Resize,
        ListenerOptions::PASSIVE,
        move |_| window_resized.clear(),
    );

    tracing::debug!(?observation, "Layout observation bound");
    observation
}

/// Announce a layout change made by the widget itself. Only widgets bound in
/// synthetic mode listen for it.
pub fn raise_widget_resize(hub: &EventHub) -> DeliveryReport {
    hub.dispatch(Target::Body, EventName::WidgetResize, None)
}
