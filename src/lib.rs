//! Pointer-interaction dispatcher for interactive board widgets.
//!
//! Every raw pointer or touch event reaching a board widget (or the document
//! around it) is routed to exactly one of three gestures: piece dragging,
//! annotation drawing, or dragging a piece out of a side pocket.
//!
//! - [`input`] - gesture slot, decision table and engine interfaces
//! - [`subscription`] - listener registration on the host, owned by a handle
//! - [`bounds`] - bounds cache and layout observation
//! - [`host`] - host surface trait and the in-memory [`host::EventHub`]
//! - [`replay`] - replays recorded event traces against a widget

pub mod bounds;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod perf;
pub mod replay;
pub mod subscription;
pub mod types;
pub mod widget;

pub use config::InteractionConfig;
pub use error::{InputError, InputResult};
pub use host::{EventHub, InputHost};
pub use subscription::SubscriptionHandle;
pub use widget::BoardWidget;
