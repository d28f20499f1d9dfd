//! Core types for board input handling.
//!
//! This module defines the event model shared by the host surface, the
//! subscription layer and the dispatcher: positions, modifiers, pointer
//! buttons, listener targets and the raw input event itself.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen rectangle of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

// ============================================================================
// Pointer Input
// ============================================================================

/// Keyboard modifiers held when the event was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub control: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// The button whose state changed for a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
}

/// Device-specific part of an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerKind {
    Mouse {
        /// Button that changed state, if any (none for plain moves)
        button: Option<MouseButton>,
        /// Bitmask of buttons currently held (1 = primary, 2 = secondary, 4 = auxiliary, 8 = back, 16 = forward)
        buttons: u16,
    },
    Touch {
        /// Active touch points, first one is the gesture's primary touch
        touches: Vec<Point>,
    },
}

/// A raw pointer or touch event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    pub pointer: PointerKind,
    /// Pointer location; `None` for a touch event with no active touches
    pub position: Option<Point>,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub fn mouse(position: Point, button: Option<MouseButton>) -> Self {
        let buttons = match button {
            Some(MouseButton::Primary) => 1,
            Some(MouseButton::Secondary) => 2,
            Some(MouseButton::Auxiliary) => 4,
            Some(MouseButton::Back) => 8,
            Some(MouseButton::Forward) => 16,
            None => 0,
        };
        Self {
            pointer: PointerKind::Mouse { button, buttons },
            position: Some(position),
            modifiers: Modifiers::default(),
        }
    }

    pub fn touch(touches: Vec<Point>) -> Self {
        let position = touches.first().copied();
        Self {
            pointer: PointerKind::Touch { touches },
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_touch(&self) -> bool {
        matches!(self.pointer, PointerKind::Touch { .. })
    }
}

// ============================================================================
// Listener Targets
// ============================================================================

/// Which side reserve a pocket element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PocketSide {
    Top,
    Bottom,
}

/// Where a listener is attached on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// The board element itself
    Root,
    /// The element wrapping the board, observed for size changes
    Wrap,
    /// A side reserve of pieces
    Pocket(PocketSide),
    Document,
    /// The document body, observed instead of the wrap for zoomed boards
    Body,
    Window,
}

/// Where a gesture-start event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Board,
    Pocket,
}

/// Event names the subscription layer listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventName {
    #[serde(rename = "mousedown")]
    MouseDown,
    #[serde(rename = "touchstart")]
    TouchStart,
    #[serde(rename = "mousemove")]
    MouseMove,
    #[serde(rename = "touchmove")]
    TouchMove,
    #[serde(rename = "mouseup")]
    MouseUp,
    #[serde(rename = "touchend")]
    TouchEnd,
    #[serde(rename = "contextmenu")]
    ContextMenu,
    #[serde(rename = "scroll")]
    Scroll,
    #[serde(rename = "resize")]
    Resize,
    /// Synthetic notification raised by the widget when its layout changes
    #[serde(rename = "boardinput.resize")]
    WidgetResize,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::MouseMove => "mousemove",
            Self::TouchMove => "touchmove",
            Self::MouseUp => "mouseup",
            Self::TouchEnd => "touchend",
            Self::ContextMenu => "contextmenu",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::WidgetResize => "boardinput.resize",
        }
    }

    /// Gesture stage this event drives, if it carries pointer input.
    pub fn stage(self) -> Option<Stage> {
        match self {
            Self::MouseDown | Self::TouchStart => Some(Stage::Start),
            Self::MouseMove | Self::TouchMove => Some(Stage::Move),
            Self::MouseUp | Self::TouchEnd => Some(Stage::End),
            _ => None,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of a gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Start,
    Move,
    End,
}
