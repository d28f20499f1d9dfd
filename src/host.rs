//! Host input surface.
//!
//! The subscription layer talks to whatever delivers input (a browser
//! binding, a windowing toolkit, a test harness) through [`InputHost`].
//! [`EventHub`] is an in-memory implementation with DOM-like delivery rules:
//!
//! - events travel a fixed element path from their target up to the document
//! - capture listeners fire top-down before bubbling listeners fire bottom-up
//! - `scroll`, `resize` and the synthetic widget resize do not bubble
//! - `prevent_default` is ignored inside passive listeners
//!
//! Listeners are collected before any of them runs, so a listener may remove
//! registrations (including its own) while an event is being delivered.

use crate::types::{EventName, InputEvent, PocketSide, Target};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback for host events.
pub type Listener = Rc<dyn Fn(&mut HostEvent)>;

/// Callback for native size-observation notifications.
pub type ResizeCallback = Rc<dyn Fn()>;

/// Identifies one registration on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registration options, mirroring `addEventListener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// Listener promises not to call `prevent_default`
    pub passive: bool,
    /// Listener fires during the capture phase
    pub capture: bool,
}

impl ListenerOptions {
    /// Active listener that may suppress default touch scrolling.
    pub const ACTIVE: Self = Self {
        passive: false,
        capture: false,
    };

    pub const PASSIVE: Self = Self {
        passive: true,
        capture: false,
    };

    pub const PASSIVE_CAPTURE: Self = Self {
        passive: true,
        capture: true,
    };
}

/// An event being delivered by the host.
pub struct HostEvent {
    name: EventName,
    target: Target,
    input: Option<InputEvent>,
    default_prevented: bool,
    in_passive_listener: bool,
}

impl HostEvent {
    pub fn new(name: EventName, target: Target, input: Option<InputEvent>) -> Self {
        Self {
            name,
            target,
            input,
            default_prevented: false,
            in_passive_listener: false,
        }
    }

    pub fn name(&self) -> EventName {
        self.name
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Pointer payload, present for mouse and touch events
    pub fn input(&self) -> Option<&InputEvent> {
        self.input.as_ref()
    }

    pub fn prevent_default(&mut self) {
        if self.in_passive_listener {
            tracing::trace!(event = %self.name, "prevent_default ignored in passive listener");
            return;
        }
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl fmt::Debug for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostEvent")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("default_prevented", &self.default_prevented)
            .finish()
    }
}

/// The host surface the subscription layer binds to.
pub trait InputHost {
    fn add_listener(
        &self,
        target: Target,
        event: EventName,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId;

    /// Remove a registration. Returns false if it was already gone.
    fn remove_listener(&self, id: ListenerId) -> bool;

    /// Observe size changes of `target` natively. Returns `None` when the
    /// host has no native size observation.
    fn observe_size(&self, target: Target, callback: ResizeCallback) -> Option<ListenerId>;
}

/// What happened while delivering one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryReport {
    /// Listeners invoked
    pub delivered: usize,
    pub default_prevented: bool,
}

struct Registration {
    id: ListenerId,
    target: Target,
    event: EventName,
    options: ListenerOptions,
    listener: Listener,
}

struct SizeObserver {
    id: ListenerId,
    target: Target,
    callback: ResizeCallback,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    registrations: Vec<Registration>,
    observers: Vec<SizeObserver>,
}

impl HubInner {
    fn allocate_id(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }
}

/// In-memory host with DOM-like delivery.
pub struct EventHub {
    inner: RefCell<HubInner>,
    native_size_observation: bool,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    /// Hub with native size observation.
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(HubInner::default()),
            native_size_observation: true,
        }
    }

    /// Hub without native size observation; widgets fall back to the
    /// synthetic resize event.
    pub fn without_size_observation() -> Self {
        Self {
            native_size_observation: false,
            ..Self::new()
        }
    }

    pub fn supports_size_observation(&self) -> bool {
        self.native_size_observation
    }

    /// Total live registrations, listeners and size observers
    pub fn registration_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.registrations.len() + inner.observers.len()
    }

    /// Live listeners for one target and event
    pub fn listener_count(&self, target: Target, event: EventName) -> usize {
        self.inner
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.target == target && r.event == event)
            .count()
    }

    /// Options a listener was registered with, for the first match.
    pub fn listener_options(&self, target: Target, event: EventName) -> Option<ListenerOptions> {
        self.inner
            .borrow()
            .registrations
            .iter()
            .find(|r| r.target == target && r.event == event)
            .map(|r| r.options)
    }

    pub fn size_observer_count(&self, target: Target) -> usize {
        self.inner
            .borrow()
            .observers
            .iter()
            .filter(|o| o.target == target)
            .count()
    }

    /// Deliver an event to `target` and the elements above it.
    pub fn dispatch(&self, target: Target, name: EventName, input: Option<InputEvent>) -> DeliveryReport {
        let path = propagation_path(target);
        let bubbles = event_bubbles(name);

        // Collect up front so listeners can mutate registrations mid-delivery.
        let queue = {
            let inner = self.inner.borrow();
            let mut queue = Vec::new();
            for &node in path.iter().rev() {
                collect_listeners(&inner.registrations, node, name, true, &mut queue);
            }
            for &node in path {
                if node != target && !bubbles {
                    break;
                }
                collect_listeners(&inner.registrations, node, name, false, &mut queue);
            }
            queue
        };

        let mut event = HostEvent::new(name, target, input);
        for (listener, passive) in &queue {
            event.in_passive_listener = *passive;
            listener(&mut event);
        }

        DeliveryReport {
            delivered: queue.len(),
            default_prevented: event.default_prevented,
        }
    }

    /// Raise a native size-change notification for `target`.
    pub fn notify_size_changed(&self, target: Target) -> usize {
        let callbacks: Vec<ResizeCallback> = self
            .inner
            .borrow()
            .observers
            .iter()
            .filter(|o| o.target == target)
            .map(|o| Rc::clone(&o.callback))
            .collect();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }
}

impl InputHost for EventHub {
    fn add_listener(
        &self,
        target: Target,
        event: EventName,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.registrations.push(Registration {
            id,
            target,
            event,
            options,
            listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if let Some(pos) = inner.registrations.iter().position(|r| r.id == id) {
            inner.registrations.remove(pos);
            return true;
        }
        if let Some(pos) = inner.observers.iter().position(|o| o.id == id) {
            inner.observers.remove(pos);
            return true;
        }
        false
    }

    fn observe_size(&self, target: Target, callback: ResizeCallback) -> Option<ListenerId> {
        if !self.native_size_observation {
            return None;
        }
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.observers.push(SizeObserver { id, target, callback });
        Some(id)
    }
}

fn collect_listeners(
    registrations: &[Registration],
    node: Target,
    name: EventName,
    capture: bool,
    queue: &mut Vec<(Listener, bool)>,
) {
    for registration in registrations {
        if registration.target == node
            && registration.event == name
            && registration.options.capture == capture
        {
            queue.push((Rc::clone(&registration.listener), registration.options.passive));
        }
    }
}

/// Elements an event passes through, innermost first.
fn propagation_path(target: Target) -> &'static [Target] {
    match target {
        Target::Root => &[Target::Root, Target::Wrap, Target::Body, Target::Document],
        Target::Wrap => &[Target::Wrap, Target::Body, Target::Document],
        Target::Pocket(PocketSide::Top) => {
            &[Target::Pocket(PocketSide::Top), Target::Body, Target::Document]
        }
        Target::Pocket(PocketSide::Bottom) => {
            &[Target::Pocket(PocketSide::Bottom), Target::Body, Target::Document]
        }
        Target::Body => &[Target::Body, Target::Document],
        Target::Document => &[Target::Document],
        Target::Window => &[Target::Window],
    }
}

fn event_bubbles(name: EventName) -> bool {
    !matches!(
        name,
        EventName::Scroll | EventName::Resize | EventName::WidgetResize
    )
}
