//! Replays recorded input traces against a widget bound to an [`EventHub`].
//!
//! A trace is a JSON array of steps:
//!
//! ```json
//! [
//!   { "target": "root", "event": "mousedown", "x": 10, "y": 10, "button": "primary" },
//!   { "target": "document", "event": "mousemove", "x": 40, "y": 12 },
//!   { "target": { "pocket": "top" }, "event": "touchstart", "x": 5, "y": 5 },
//!   { "target": "wrap", "event": "resize" }
//! ]
//! ```
//!
//! A `resize` step aimed at anything but the window is a native size-change
//! notification for that element.

use crate::config::InteractionConfig;
use crate::error::{InputError, InputResult};
use crate::host::{EventHub, InputHost};
use crate::input::Phase;
use crate::subscription::SubscriptionHandle;
use crate::types::{EventName, InputEvent, Modifiers, MouseButton, Point, PointerKind, Rect, Target};
use crate::widget::BoardWidget;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Rectangle reported to the bounds cache whenever a step measures it
pub const REPLAY_BOARD_RECT: Rect = Rect::new(0.0, 0.0, 512.0, 512.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    pub target: Target,
    pub event: EventName,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub button: Option<MouseButton>,
    /// Held-buttons mask; derived from `button` when absent
    #[serde(default)]
    pub buttons: Option<u16>,
    /// Touch points; a single point at `x`/`y` when absent
    #[serde(default)]
    pub touches: Option<Vec<Point>>,
}

impl TraceStep {
    /// Pointer payload for this step, `None` for non-pointer events.
    pub fn to_input(&self, index: usize) -> InputResult<Option<InputEvent>> {
        let is_touch = matches!(
            self.event,
            EventName::TouchStart | EventName::TouchMove | EventName::TouchEnd
        );
        let invalid = |reason: &str| InputError::InvalidTrace {
            index,
            reason: reason.to_string(),
        };

        if self.event.stage().is_none() {
            if self.touches.is_some() || self.button.is_some() || self.buttons.is_some() || self.shift {
                return Err(invalid("pointer fields on a non-pointer event"));
            }
            return Ok(None);
        }

        let position = Point::new(self.x, self.y);
        let modifiers = Modifiers {
            shift: self.shift,
            ..Modifiers::default()
        };

        let event = if is_touch {
            if self.button.is_some() || self.buttons.is_some() {
                return Err(invalid("mouse buttons on a touch event"));
            }
            let touches = self.touches.clone().unwrap_or_else(|| vec![position]);
            InputEvent::touch(touches).with_modifiers(modifiers)
        } else {
            if self.touches.is_some() {
                return Err(invalid("touch points on a mouse event"));
            }
            let mut event = InputEvent::mouse(position, self.button).with_modifiers(modifiers);
            if let (Some(mask), PointerKind::Mouse { buttons, .. }) = (self.buttons, &mut event.pointer) {
                *buttons = mask;
            }
            event
        };
        Ok(Some(event))
    }
}

pub fn parse_trace(json: &str) -> InputResult<Vec<TraceStep>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_trace(path: impl AsRef<Path>) -> InputResult<Vec<TraceStep>> {
    let contents = std::fs::read_to_string(path)?;
    parse_trace(&contents)
}

/// What one step did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub target: Target,
    pub event: EventName,
    /// Listeners (or size observers) that received the step
    pub delivered: usize,
    pub default_prevented: bool,
    pub phase: Phase,
    pub bounds_cached: bool,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<3} {:<14} {:<17} -> {:?} (delivered {}{}{})",
            self.index,
            format!("{:?}", self.target),
            self.event.as_str(),
            self.phase,
            self.delivered,
            if self.default_prevented { ", prevented" } else { "" },
            if self.bounds_cached { "" } else { ", bounds stale" },
        )
    }
}

/// A widget bound to an in-memory hub, ready to replay steps.
pub struct Replay {
    hub: Rc<EventHub>,
    widget: BoardWidget,
    /// Keeps the widget's listeners registered for the replay's lifetime
    _subscription: SubscriptionHandle,
}

impl Replay {
    pub fn new(config: InteractionConfig, native_size_observation: bool) -> Self {
        let hub = Rc::new(if native_size_observation {
            EventHub::new()
        } else {
            EventHub::without_size_observation()
        });
        let widget = BoardWidget::with_slot_engines(config);
        let host: Rc<dyn InputHost> = hub.clone();
        let subscription = widget.bind(host);
        Self {
            hub,
            widget,
            _subscription: subscription,
        }
    }

    pub fn widget(&self) -> &BoardWidget {
        &self.widget
    }

    pub fn step(&self, index: usize, step: &TraceStep) -> InputResult<StepOutcome> {
        let input = step.to_input(index)?;
        if input.is_some() {
            // Engines read the board rectangle on every pointer event.
            self.widget.bounds().get_or_compute(|| REPLAY_BOARD_RECT);
        }

        let (delivered, default_prevented) =
            if step.event == EventName::Resize && step.target != Target::Window {
                (self.hub.notify_size_changed(step.target), false)
            } else {
                let report = self.hub.dispatch(step.target, step.event, input);
                (report.delivered, report.default_prevented)
            };

        Ok(StepOutcome {
            index,
            target: step.target,
            event: step.event,
            delivered,
            default_prevented,
            phase: self.widget.phase(),
            bounds_cached: self.widget.bounds().is_cached(),
        })
    }

    pub fn run(&self, steps: &[TraceStep]) -> InputResult<Vec<StepOutcome>> {
        steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.step(index, step))
            .collect()
    }
}
