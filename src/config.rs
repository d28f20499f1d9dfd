//! Widget interaction configuration.
//!
//! Loaded from JSON (camelCase keys, every field optional) and turned into
//! the initial [`InteractionState`] plus the binding layout used by the
//! subscription layer.

use crate::error::InputResult;
use crate::input::InteractionState;
use crate::types::{PocketSide, Target};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Annotation drawing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawableConfig {
    pub enabled: bool,
}

impl Default for DrawableConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Which side pockets the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PocketsConfig {
    pub top: bool,
    pub bottom: bool,
}

impl PocketsConfig {
    /// Present pockets, top first.
    pub fn sides(&self) -> Vec<PocketSide> {
        let mut sides = Vec::with_capacity(2);
        if self.top {
            sides.push(PocketSide::Top);
        }
        if self.bottom {
            sides.push(PocketSide::Bottom);
        }
        sides
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Spectator mode: no gesture may ever start
    pub view_only: bool,
    pub drawable: DrawableConfig,
    /// Suppress the native context menu even when drawing is disabled
    pub disable_context_menu: bool,
    /// Observe the document body instead of the wrap element for size
    /// changes. Zoomed boards resize their own wrap and would otherwise
    /// trigger recursive resize callbacks.
    pub observe_document_body: bool,
    pub pockets: PocketsConfig,
}

impl InteractionConfig {
    pub fn from_json_str(json: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> InputResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "Loaded interaction config");
        Ok(config)
    }

    /// Initial interaction state for a widget built from this config.
    pub fn initial_state(&self) -> InteractionState {
        InteractionState::new(
            self.view_only,
            self.drawable.enabled,
            self.disable_context_menu,
        )
    }

    /// Element whose size changes invalidate the bounds cache.
    pub fn observation_target(&self) -> Target {
        if self.observe_document_body {
            Target::Body
        } else {
            Target::Wrap
        }
    }
}
