//! Crate-wide constants.
//!
//! Centralizes the button masks, event groupings and thresholds used by the
//! dispatcher and the subscription layer.

use crate::types::EventName;

// ============================================================================
// Pointer Buttons
// ============================================================================

/// `buttons` bitmask value when only the secondary button is held
pub const SECONDARY_BUTTONS_MASK: u16 = 2;

// ============================================================================
// Event Groups
// ============================================================================

/// Events that begin a gesture, listened for on the root and pocket elements
pub const START_EVENTS: [EventName; 2] = [EventName::TouchStart, EventName::MouseDown];

/// Events that continue a gesture, listened for on the document
pub const MOVE_EVENTS: [EventName; 2] = [EventName::TouchMove, EventName::MouseMove];

/// Events that finish a gesture, listened for on the document
pub const END_EVENTS: [EventName; 2] = [EventName::TouchEnd, EventName::MouseUp];

// ============================================================================
// Profiling
// ============================================================================

/// A single dispatch taking longer than this is logged as slow
pub const SLOW_DISPATCH_MS: f64 = 4.0;

// ============================================================================
// Logging
// ============================================================================

/// Log filter used by the replay tool when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "boardinput=info";
