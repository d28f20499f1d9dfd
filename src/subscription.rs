//! Subscription manager - attaches a widget's listeners to the host.
//!
//! Gesture starts are listened for on the board root and on each pocket
//! element. Moves and ends are listened for on the document, because a
//! gesture begun on the widget routinely ends with the pointer outside it.
//! Everything registered by [`bind`] is owned by one [`SubscriptionHandle`];
//! dropping or disposing the handle removes it all.

use crate::bounds;
use crate::constants::{END_EVENTS, MOVE_EVENTS, START_EVENTS};
use crate::host::{HostEvent, InputHost, ListenerId, ListenerOptions};
use crate::input::Action;
use crate::types::{EventName, Origin, Stage, Target};
use crate::widget::BoardWidget;
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

/// One registration made through a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub target: Target,
    /// `None` for native size observers
    pub event: Option<EventName>,
    /// `None` for native size observers
    pub options: Option<ListenerOptions>,
    pub id: ListenerId,
}

/// Owns a set of host registrations and releases them together.
///
/// Listeners created through the handle check a shared liveness flag, so one
/// that the host had already queued when the handle was disposed does
/// nothing when it finally runs.
pub struct SubscriptionHandle {
    id: Uuid,
    host: Rc<dyn InputHost>,
    registrations: Vec<Registration>,
    live: Rc<Cell<bool>>,
}

impl SubscriptionHandle {
    pub fn new(host: Rc<dyn InputHost>) -> Self {
        Self {
            id: Uuid::new_v4(),
            host,
            registrations: Vec::new(),
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register a listener that stops firing once the handle is disposed.
    pub fn listen(
        &mut self,
        target: Target,
        event: EventName,
        options: ListenerOptions,
        listener: impl Fn(&mut HostEvent) + 'static,
    ) {
        let live = Rc::clone(&self.live);
        let id = self.host.add_listener(
            target,
            event,
            options,
            Rc::new(move |host_event: &mut HostEvent| {
                if live.get() {
                    listener(host_event);
                }
            }),
        );
        self.registrations.push(Registration {
            target,
            event: Some(event),
            options: Some(options),
            id,
        });
    }

    /// Observe `target` natively. Returns false if the host cannot.
    pub fn observe_size(&mut self, target: Target, callback: impl Fn() + 'static) -> bool {
        let live = Rc::clone(&self.live);
        let observed = self.host.observe_size(
            target,
            Rc::new(move || {
                if live.get() {
                    callback();
                }
            }),
        );
        match observed {
            Some(id) => {
                self.registrations.push(Registration {
                    target,
                    event: None,
                    options: None,
                    id,
                });
                true
            }
            None => false,
        }
    }

    /// Live registrations, in the order they were made.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        !self.live.get()
    }

    /// Remove every registration in the order it was made. Returns how many
    /// were removed; a second call removes nothing.
    pub fn dispose(&mut self) -> usize {
        if !self.live.replace(false) {
            return 0;
        }
        let mut removed = 0;
        for registration in self.registrations.drain(..) {
            if self.host.remove_listener(registration.id) {
                removed += 1;
            } else {
                tracing::warn!(
                    target_element = ?registration.target,
                    event = ?registration.event,
                    options = ?registration.options,
                    "Registration already removed from host"
                );
            }
        }
        tracing::debug!(handle = %self.id, removed, "Subscription disposed");
        removed
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Attach every listener the widget needs and return the owning handle.
///
/// View-only widgets get no gesture listeners at all; bounds invalidation and
/// context-menu suppression are bound either way.
pub fn bind(widget: &BoardWidget, host: Rc<dyn InputHost>) -> SubscriptionHandle {
    let mut handle = SubscriptionHandle::new(host);
    let config = *widget.config();
    let state = widget.state();

    bounds::bind_observer(
        &mut handle,
        widget.bounds(),
        config.observation_target(),
        widget.resize_hook(),
    );

    let pockets: Vec<Target> = config.pockets.sides().into_iter().map(Target::Pocket).collect();

    if !state.view_only() {
        bind_start(&mut handle, widget, Target::Root, Origin::Board);
        for &pocket in &pockets {
            bind_start(&mut handle, widget, pocket, Origin::Pocket);
        }
        for event in MOVE_EVENTS {
            bind_continuation(&mut handle, widget, event, Stage::Move);
        }
        for event in END_EVENTS {
            bind_continuation(&mut handle, widget, event, Stage::End);
        }
    }

    if state.suppresses_context_menu() {
        for target in std::iter::once(Target::Root).chain(pockets.iter().copied()) {
            handle.listen(target, EventName::ContextMenu, ListenerOptions::ACTIVE, |event| {
                event.prevent_default()
            });
        }
    }

    tracing::debug!(
        handle = %handle.id(),
        registrations = handle.len(),
        view_only = state.view_only(),
        pockets = pockets.len(),
        "Board listeners bound"
    );
    handle
}

/// Start listeners cannot be passive: a started gesture suppresses the
/// default touch scrolling and text selection.
fn bind_start(handle: &mut SubscriptionHandle, widget: &BoardWidget, target: Target, origin: Origin) {
    for event in START_EVENTS {
        let core = widget.core();
        handle.listen(target, event, ListenerOptions::ACTIVE, move |host_event| {
            let action = {
                let Some(input) = host_event.input() else {
                    return;
                };
                let Ok(mut core) = core.try_borrow_mut() else {
                    tracing::warn!(event = %host_event.name(), "Widget busy, dropping re-entrant start event");
                    return;
                };
                core.dispatch(Stage::Start, origin, input)
            };
            if action != Action::Ignore {
                host_event.prevent_default();
            }
        });
    }
}

fn bind_continuation(handle: &mut SubscriptionHandle, widget: &BoardWidget, event: EventName, stage: Stage) {
    let core = widget.core();
    handle.listen(Target::Document, event, ListenerOptions::ACTIVE, move |host_event| {
        let Some(input) = host_event.input() else {
            return;
        };
        let Ok(mut core) = core.try_borrow_mut() else {
            tracing::warn!(event = %host_event.name(), "Widget busy, dropping re-entrant event");
            return;
        };
        core.dispatch(stage, Origin::Board, input);
    });
}
