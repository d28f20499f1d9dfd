//! Board widget - owns the interaction state, the dispatcher and the bounds
//! cache, and binds them to a host.

use crate::bounds::BoundsCache;
use crate::config::InteractionConfig;
use crate::host::InputHost;
use crate::input::{Action, Dispatcher, Engines, InteractionState, Phase};
use crate::subscription::{self, SubscriptionHandle};
use crate::types::{InputEvent, Origin, Stage};
use std::cell::RefCell;
use std::rc::Rc;

/// State and dispatcher shared by all of a widget's listeners.
pub struct WidgetCore {
    pub state: InteractionState,
    pub dispatcher: Dispatcher,
}

impl WidgetCore {
    pub fn dispatch(&mut self, stage: Stage, origin: Origin, event: &InputEvent) -> Action {
        self.dispatcher.dispatch(&mut self.state, stage, origin, event)
    }
}

/// An interactive board as seen by the input layer.
pub struct BoardWidget {
    config: InteractionConfig,
    core: Rc<RefCell<WidgetCore>>,
    bounds: Rc<BoundsCache>,
    resize_hook: Option<Rc<dyn Fn()>>,
}

impl BoardWidget {
    pub fn new(config: InteractionConfig, engines: Engines) -> Self {
        Self {
            config,
            core: Rc::new(RefCell::new(WidgetCore {
                state: config.initial_state(),
                dispatcher: Dispatcher::new(engines),
            })),
            bounds: Rc::new(BoundsCache::new()),
            resize_hook: None,
        }
    }

    /// Widget running on the position-tracking reference engines.
    pub fn with_slot_engines(config: InteractionConfig) -> Self {
        Self::new(config, Engines::slot())
    }

    /// Called after the bounds cache is cleared by a size change.
    pub fn set_resize_hook(&mut self, hook: impl Fn() + 'static) {
        self.resize_hook = Some(Rc::new(hook));
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn bounds(&self) -> &Rc<BoundsCache> {
        &self.bounds
    }

    pub(crate) fn core(&self) -> Rc<RefCell<WidgetCore>> {
        Rc::clone(&self.core)
    }

    pub(crate) fn resize_hook(&self) -> Option<Rc<dyn Fn()>> {
        self.resize_hook.clone()
    }

    /// Snapshot of the current interaction state.
    pub fn state(&self) -> InteractionState {
        self.core.borrow().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.core.borrow().state.phase()
    }

    /// Toggle annotation drawing, e.g. when the user changes preferences.
    pub fn set_drawing_enabled(&self, enabled: bool) {
        self.core.borrow_mut().state.set_drawing_enabled(enabled);
    }

    /// Attach all listeners to `host`. Dropping the handle detaches them.
    pub fn bind(&self, host: Rc<dyn InputHost>) -> SubscriptionHandle {
        subscription::bind(self, host)
    }

    // ------------------------------------------------------------------------
    // Direct dispatch, for embedders that route events themselves
    // ------------------------------------------------------------------------

    pub fn on_start(&self, origin: Origin, event: &InputEvent) -> Action {
        self.core.borrow_mut().dispatch(Stage::Start, origin, event)
    }

    pub fn on_move(&self, event: &InputEvent) -> Action {
        self.core.borrow_mut().dispatch(Stage::Move, Origin::Board, event)
    }

    pub fn on_end(&self, event: &InputEvent) -> Action {
        self.core.borrow_mut().dispatch(Stage::End, Origin::Board, event)
    }
}
