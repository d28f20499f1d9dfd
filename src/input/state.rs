//! Interaction state - the single gesture slot plus the widget's input policy.
//!
//! The three "current gesture" slots of a board widget (piece drag, annotation
//! stroke, pocket drag) are folded into one tagged [`Gesture`], so at most one
//! gesture can be active at any time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging          (start on the board, default trigger)
//! Idle -> PocketDragging    (start on a pocket, default trigger)
//! Idle -> Drawing           (start with shift or the secondary button)
//!
//! Dragging/PocketDragging -> Idle   (end, or cancelled by a new start)
//! Drawing -> Idle                   (end, or cancelled by a new start)
//! ```

use crate::types::{Modifiers, Point};
use serde::Serialize;

/// A piece being moved, from the board or out of a pocket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Pointer position where the drag began
    pub origin: Point,
    /// Latest pointer position
    pub current: Point,
    /// Whether the pointer has moved since the drag began
    pub moved: bool,
}

impl DragGesture {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
            moved: false,
        }
    }
}

/// An annotation stroke in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawGesture {
    pub start: Point,
    pub current: Point,
    /// Modifiers held at the start, used by draw engines to pick a brush
    pub modifiers: Modifiers,
}

/// The widget's current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No active gesture
    #[default]
    Idle,
    /// Dragging a piece that started on the board
    Dragging(DragGesture),
    /// Drawing an annotation
    Drawing(DrawGesture),
    /// Dragging a piece out of a side pocket
    PocketDragging(DragGesture),
}

/// Data-free view of [`Gesture`], the states of the dispatch machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Idle,
    Dragging,
    Drawing,
    PocketDragging,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Idle,
        Phase::Dragging,
        Phase::Drawing,
        Phase::PocketDragging,
    ];
}

impl Gesture {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging(_) => Phase::Dragging,
            Self::Drawing(_) => Phase::Drawing,
            Self::PocketDragging(_) => Phase::PocketDragging,
        }
    }

    /// Drag gesture data for board and pocket drags alike.
    pub fn drag(&self) -> Option<&DragGesture> {
        match self {
            Self::Dragging(drag) | Self::PocketDragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn draw(&self) -> Option<&DrawGesture> {
        match self {
            Self::Drawing(draw) => Some(draw),
            _ => None,
        }
    }
}

/// Per-widget interaction state, owned by the widget for its whole lifetime.
///
/// The dispatcher only reads it; drag, draw and pocket engines mutate the
/// gesture slot through the methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    gesture: Gesture,
    view_only: bool,
    drawing_enabled: bool,
    disable_context_menu: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(false, true, false)
    }
}

impl InteractionState {
    pub fn new(view_only: bool, drawing_enabled: bool, disable_context_menu: bool) -> Self {
        Self {
            gesture: Gesture::Idle,
            view_only,
            drawing_enabled,
            disable_context_menu,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn phase(&self) -> Phase {
        self.gesture.phase()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// True for board drags and pocket drags
    pub fn is_dragging(&self) -> bool {
        self.gesture.drag().is_some()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing(_))
    }

    pub fn is_pocket_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::PocketDragging(_))
    }

    pub fn view_only(&self) -> bool {
        self.view_only
    }

    pub fn drawing_enabled(&self) -> bool {
        self.drawing_enabled
    }

    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        self.drawing_enabled = enabled;
    }

    pub fn disable_context_menu(&self) -> bool {
        self.disable_context_menu
    }

    /// Whether the native context menu is suppressed on the board and
    /// pockets. Drawing uses the secondary button, so it suppresses it too.
    pub fn suppresses_context_menu(&self) -> bool {
        self.disable_context_menu || self.drawing_enabled
    }

    // ------------------------------------------------------------------------
    // Gesture slot mutation, used by engines
    // ------------------------------------------------------------------------

    /// Begin a board drag. Refused while view-only.
    pub fn start_dragging(&mut self, origin: Point) -> bool {
        if self.view_only {
            return false;
        }
        self.gesture = Gesture::Dragging(DragGesture::new(origin));
        true
    }

    /// Begin a pocket drag. Refused while view-only.
    pub fn start_pocket_dragging(&mut self, origin: Point) -> bool {
        if self.view_only {
            return false;
        }
        self.gesture = Gesture::PocketDragging(DragGesture::new(origin));
        true
    }

    /// Begin an annotation stroke. Refused while view-only or with drawing disabled.
    pub fn start_drawing(&mut self, start: Point, modifiers: Modifiers) -> bool {
        if self.view_only || !self.drawing_enabled {
            return false;
        }
        self.gesture = Gesture::Drawing(DrawGesture {
            start,
            current: start,
            modifiers,
        });
        true
    }

    /// Update the pointer position of the active drag, if any
    pub fn set_drag_current(&mut self, current: Point) {
        if let Gesture::Dragging(drag) | Gesture::PocketDragging(drag) = &mut self.gesture {
            drag.moved |= drag.current != current;
            drag.current = current;
        }
    }

    /// Update the pointer position of the active stroke, if any
    pub fn set_draw_current(&mut self, current: Point) {
        if let Gesture::Drawing(draw) = &mut self.gesture {
            draw.current = current;
        }
    }

    /// Clear the active drag (board or pocket) and return it.
    pub fn take_drag(&mut self) -> Option<DragGesture> {
        match self.gesture {
            Gesture::Dragging(drag) | Gesture::PocketDragging(drag) => {
                self.gesture = Gesture::Idle;
                Some(drag)
            }
            _ => None,
        }
    }

    /// Clear the active stroke and return it.
    pub fn take_draw(&mut self) -> Option<DrawGesture> {
        match self.gesture {
            Gesture::Drawing(draw) => {
                self.gesture = Gesture::Idle;
                Some(draw)
            }
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
