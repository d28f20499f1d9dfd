//! Mode dispatcher - routes every pointer event to exactly one engine.
//!
//! Dispatch is split in two:
//! - [`transition`] is the pure decision table. It maps the current [`Phase`],
//!   the widget [`Policy`] and a [`Trigger`] (stage, alternate flag, origin)
//!   to a single [`Action`].
//! - [`Dispatcher`] applies that action by calling into the engines, which
//!   are the only code that mutates the gesture slot.
//!
//! ## Start events (first match wins)
//!
//! ```text
//! Dragging | PocketDragging  -> CancelDrag
//! Drawing                    -> CancelDraw
//! alternate trigger          -> StartDraw if drawing enabled, else Ignore
//! not view-only              -> StartDrag (board) | StartPocketDrag (pocket)
//! otherwise                  -> Ignore
//! ```
//!
//! A start event that cancels never starts anything in the same step.
//!
//! ## Move / end events
//!
//! ```text
//! Drawing        -> MoveDraw/EndDraw if drawing enabled, else Ignore
//! not view-only  -> MoveDrag/EndDrag
//! otherwise      -> Ignore
//! ```

use super::engines::Engines;
use super::state::{InteractionState, Phase};
use super::trigger::is_alternate_trigger;
use crate::profile_scope;
use crate::types::{InputEvent, Origin, Stage};
use serde::Serialize;

/// The policy flags that take part in dispatch decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub view_only: bool,
    pub drawing_enabled: bool,
}

impl Policy {
    pub fn of(state: &InteractionState) -> Self {
        Self {
            view_only: state.view_only(),
            drawing_enabled: state.drawing_enabled(),
        }
    }
}

/// Transition label: what kind of event arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigger {
    pub stage: Stage,
    /// Shift held or secondary button pressed
    pub alternate: bool,
    pub origin: Origin,
}

impl Trigger {
    pub fn from_event(stage: Stage, origin: Origin, event: &InputEvent) -> Self {
        Self {
            stage,
            alternate: is_alternate_trigger(event),
            origin,
        }
    }
}

/// The single engine call chosen for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Ignore,
    CancelDrag,
    CancelDraw,
    StartDrag,
    StartPocketDrag,
    StartDraw,
    MoveDrag,
    MoveDraw,
    EndDrag,
    EndDraw,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "Ignore",
            Self::CancelDrag => "CancelDrag",
            Self::CancelDraw => "CancelDraw",
            Self::StartDrag => "StartDrag",
            Self::StartPocketDrag => "StartPocketDrag",
            Self::StartDraw => "StartDraw",
            Self::MoveDrag => "MoveDrag",
            Self::MoveDraw => "MoveDraw",
            Self::EndDrag => "EndDrag",
            Self::EndDraw => "EndDraw",
        }
    }

    pub fn is_ignore(self) -> bool {
        self == Self::Ignore
    }

    /// Actions that may move the state from Idle to an active gesture
    pub fn starts_gesture(self) -> bool {
        matches!(self, Self::StartDrag | Self::StartPocketDrag | Self::StartDraw)
    }
}

/// Pure dispatch decision.
pub fn transition(phase: Phase, policy: Policy, trigger: Trigger) -> Action {
    match trigger.stage {
        Stage::Start => match phase {
            Phase::Dragging | Phase::PocketDragging => Action::CancelDrag,
            Phase::Drawing => Action::CancelDraw,
            Phase::Idle if trigger.alternate => {
                if policy.drawing_enabled && !policy.view_only {
                    Action::StartDraw
                } else {
                    Action::Ignore
                }
            }
            Phase::Idle if policy.view_only => Action::Ignore,
            Phase::Idle => match trigger.origin {
                Origin::Board => Action::StartDrag,
                Origin::Pocket => Action::StartPocketDrag,
            },
        },
        stage @ (Stage::Move | Stage::End) => {
            let end = stage == Stage::End;
            match phase {
                Phase::Drawing if !policy.drawing_enabled => Action::Ignore,
                Phase::Drawing if end => Action::EndDraw,
                Phase::Drawing => Action::MoveDraw,
                _ if policy.view_only => Action::Ignore,
                _ if end => Action::EndDrag,
                _ => Action::MoveDrag,
            }
        }
    }
}

/// Applies dispatch decisions to a widget's engines.
pub struct Dispatcher {
    engines: Engines,
}

impl Dispatcher {
    pub fn new(engines: Engines) -> Self {
        Self { engines }
    }

    /// Route one event. Returns the action that was taken.
    pub fn dispatch(
        &mut self,
        state: &mut InteractionState,
        stage: Stage,
        origin: Origin,
        event: &InputEvent,
    ) -> Action {
        profile_scope!("dispatch");

        let phase = state.phase();
        let trigger = Trigger::from_event(stage, origin, event);
        let action = transition(phase, Policy::of(state), trigger);

        if action.is_ignore() {
            tracing::trace!(?phase, ?trigger, "Event ignored");
            return action;
        }
        if !matches!(action, Action::MoveDrag | Action::MoveDraw) {
            tracing::debug!(?phase, action = action.as_str(), ?origin, "Dispatching");
        }

        let engines = &mut self.engines;
        match action {
            Action::Ignore => {}
            Action::CancelDrag => engines.drag.cancel(state),
            Action::CancelDraw => engines.draw.cancel(state),
            Action::StartDrag => engines.drag.start(state, event),
            Action::StartPocketDrag => engines.pocket.drag(state, event),
            Action::StartDraw => engines.draw.start(state, event),
            Action::MoveDrag => engines.drag.move_to(state, event),
            Action::MoveDraw => engines.draw.move_to(state, event),
            Action::EndDrag => engines.drag.end(state, event),
            Action::EndDraw => engines.draw.end(state, event),
        }
        action
    }

    /// Gesture-start entry point (root or pocket `mousedown`/`touchstart`).
    pub fn on_start(
        &mut self,
        state: &mut InteractionState,
        origin: Origin,
        event: &InputEvent,
    ) -> Action {
        self.dispatch(state, Stage::Start, origin, event)
    }

    /// Continuation entry point (document `mousemove`/`touchmove`).
    pub fn on_move(&mut self, state: &mut InteractionState, event: &InputEvent) -> Action {
        self.dispatch(state, Stage::Move, Origin::Board, event)
    }

    /// Continuation entry point (document `mouseup`/`touchend`).
    pub fn on_end(&mut self, state: &mut InteractionState, event: &InputEvent) -> Action {
        self.dispatch(state, Stage::End, Origin::Board, event)
    }
}

/// Render the decision table for one policy, one transition per line.
///
/// Start rows enumerate origin and trigger; continuation rows do not depend
/// on either and print `-` for both.
pub fn render_transition_table(policy: Policy) -> String {
    let mut rows = Vec::new();
    for phase in Phase::ALL {
        for origin in [Origin::Board, Origin::Pocket] {
            for alternate in [false, true] {
                let trigger = Trigger {
                    stage: Stage::Start,
                    alternate,
                    origin,
                };
                let origin_label = match origin {
                    Origin::Board => "board",
                    Origin::Pocket => "pocket",
                };
                let trigger_label = if alternate { "alternate" } else { "default" };
                rows.push(table_row(phase, "start", origin_label, trigger_label, transition(phase, policy, trigger)));
            }
        }
    }
    for phase in Phase::ALL {
        for (stage, label) in [(Stage::Move, "move"), (Stage::End, "end")] {
            let trigger = Trigger {
                stage,
                alternate: false,
                origin: Origin::Board,
            };
            rows.push(table_row(phase, label, "-", "-", transition(phase, policy, trigger)));
        }
    }
    rows.join("\n")
}

fn table_row(phase: Phase, stage: &str, origin: &str, trigger: &str, action: Action) -> String {
    let phase = format!("{phase:?}");
    format!(
        "{phase:<14} {stage:<5} {origin:<6} {trigger:<9} -> {}",
        action.as_str()
    )
}
