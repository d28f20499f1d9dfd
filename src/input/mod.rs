//! Pointer and touch gesture handling for the board.
//!
//! ## Architecture
//!
//! The board has three mutually exclusive gestures: dragging a piece,
//! drawing an annotation, and dragging a piece out of a side pocket. The
//! active one lives in a single tagged slot (`InteractionState`), and the
//! dispatcher is an explicit state machine over that slot's phase.
//!
//! ## Modules
//!
//! - `state` - Gesture slot and input policy flags
//! - `trigger` - Alternate trigger (shift / secondary button) detection
//! - `dispatch` - Decision table and the dispatcher applying it
//! - `engines` - Drag, draw and pocket engine interfaces, reference engines

mod dispatch;
mod engines;
mod state;
mod trigger;

pub use dispatch::{Action, Dispatcher, Policy, Trigger, render_transition_table, transition};
pub use engines::{DragEngine, DrawEngine, Engines, PocketEngine, SlotEngine};
pub use state::{DragGesture, DrawGesture, Gesture, InteractionState, Phase};
pub use trigger::{is_alternate_trigger, is_secondary_button};
