//! Alternate trigger detection.
//!
//! A start event normally begins a piece drag. Holding shift or pressing the
//! secondary mouse button redirects it to annotation drawing instead. The
//! secondary-button half of the predicate only exists for mouse input; touch
//! input can only signal it through a held shift key (external keyboards).

use crate::constants::SECONDARY_BUTTONS_MASK;
use crate::types::{InputEvent, MouseButton, PointerKind};

/// Returns true if the event was raised by the secondary (right) mouse button.
///
/// Either signal is accepted: the changed `button`, or a `buttons` mask with
/// only the secondary button held. Some hosts report one but not the other.
pub fn is_secondary_button(event: &InputEvent) -> bool {
    match &event.pointer {
        PointerKind::Mouse { button, buttons } => {
            *button == Some(MouseButton::Secondary) || *buttons == SECONDARY_BUTTONS_MASK
        }
        PointerKind::Touch { .. } => false,
    }
}

/// Returns true if a start event should begin a drawing instead of a drag.
#[inline]
pub fn is_alternate_trigger(event: &InputEvent) -> bool {
    event.modifiers.shift || is_secondary_button(event)
}
