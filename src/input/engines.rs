//! Gesture engine interfaces.
//!
//! The dispatcher never touches the gesture slot itself. It picks an action
//! and hands the event to one of these engines, which own what a drag or a
//! drawing actually does (hit testing, piece animation, arrow shapes).
//!
//! [`SlotEngine`] is a minimal implementation of all three traits that only
//! tracks pointer positions in the gesture slot. The replay tool and tests
//! run on it; real widgets plug in their own engines.

use super::state::InteractionState;
use crate::types::{InputEvent, Point};

/// Moves pieces that start on the board, and finishes pocket drags.
pub trait DragEngine {
    fn start(&mut self, state: &mut InteractionState, event: &InputEvent);
    fn move_to(&mut self, state: &mut InteractionState, event: &InputEvent);
    fn end(&mut self, state: &mut InteractionState, event: &InputEvent);
    /// Abort the active drag, board or pocket. Must be a no-op when idle.
    fn cancel(&mut self, state: &mut InteractionState);
}

/// Sketches annotations on the board.
pub trait DrawEngine {
    fn start(&mut self, state: &mut InteractionState, event: &InputEvent);
    fn move_to(&mut self, state: &mut InteractionState, event: &InputEvent);
    fn end(&mut self, state: &mut InteractionState, event: &InputEvent);
    /// Abort the active stroke. Must be a no-op when idle.
    fn cancel(&mut self, state: &mut InteractionState);
}

/// Starts drags out of a side pocket. Moving, dropping and cancelling those
/// drags goes through the [`DragEngine`].
pub trait PocketEngine {
    fn drag(&mut self, state: &mut InteractionState, event: &InputEvent);
}

/// The three engines a widget dispatches to.
pub struct Engines {
    pub drag: Box<dyn DragEngine>,
    pub draw: Box<dyn DrawEngine>,
    pub pocket: Box<dyn PocketEngine>,
}

impl Engines {
    pub fn new(
        drag: impl DragEngine + 'static,
        draw: impl DrawEngine + 'static,
        pocket: impl PocketEngine + 'static,
    ) -> Self {
        Self {
            drag: Box::new(drag),
            draw: Box::new(draw),
            pocket: Box::new(pocket),
        }
    }

    /// Reference engines for every role.
    pub fn slot() -> Self {
        Self::new(SlotEngine::default(), SlotEngine::default(), SlotEngine::default())
    }
}

/// Position-tracking engine used for replay and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlotEngine {
    /// Gestures finished through `end`
    pub completed: u32,
    /// Gestures aborted through `cancel`
    pub cancelled: u32,
    /// Pointer position of the most recently completed gesture
    pub last_drop: Option<Point>,
}

impl DragEngine for SlotEngine {
    fn start(&mut self, state: &mut InteractionState, event: &InputEvent) {
        let Some(position) = event.position else {
            return;
        };
        if state.start_dragging(position) {
            tracing::debug!(x = position.x, y = position.y, "Drag started");
        }
    }

    fn move_to(&mut self, state: &mut InteractionState, event: &InputEvent) {
        if let Some(position) = event.position {
            state.set_drag_current(position);
        }
    }

    fn end(&mut self, state: &mut InteractionState, event: &InputEvent) {
        // A touchend carries no touches; the drop happens at the last move.
        if let Some(position) = event.position {
            state.set_drag_current(position);
        }
        if let Some(drag) = state.take_drag() {
            self.completed += 1;
            self.last_drop = Some(drag.current);
            tracing::debug!(x = drag.current.x, y = drag.current.y, moved = drag.moved, "Drag ended");
        }
    }

    fn cancel(&mut self, state: &mut InteractionState) {
        if state.take_drag().is_some() {
            self.cancelled += 1;
            tracing::debug!("Drag cancelled");
        }
    }
}

impl DrawEngine for SlotEngine {
    fn start(&mut self, state: &mut InteractionState, event: &InputEvent) {
        let Some(position) = event.position else {
            return;
        };
        if state.start_drawing(position, event.modifiers) {
            tracing::debug!(x = position.x, y = position.y, "Drawing started");
        }
    }

    fn move_to(&mut self, state: &mut InteractionState, event: &InputEvent) {
        if let Some(position) = event.position {
            state.set_draw_current(position);
        }
    }

    fn end(&mut self, state: &mut InteractionState, event: &InputEvent) {
        if let Some(position) = event.position {
            state.set_draw_current(position);
        }
        if let Some(draw) = state.take_draw() {
            self.completed += 1;
            self.last_drop = Some(draw.current);
            tracing::debug!(x = draw.current.x, y = draw.current.y, "Drawing ended");
        }
    }

    fn cancel(&mut self, state: &mut InteractionState) {
        if state.take_draw().is_some() {
            self.cancelled += 1;
            tracing::debug!("Drawing cancelled");
        }
    }
}

impl PocketEngine for SlotEngine {
    fn drag(&mut self, state: &mut InteractionState, event: &InputEvent) {
        let Some(position) = event.position else {
            return;
        };
        if state.start_pocket_dragging(position) {
            tracing::debug!(x = position.x, y = position.y, "Pocket drag started");
        }
    }
}
