//! Deck configuration with TOML preset support.
//!
//! All tweakable settings (viewport, gesture thresholds, overlay ranges,
//! springs, stack window, flip) are consolidated here. Options serialize
//! to/from TOML and are resolved once per mount into an immutable
//! [`DeckConfig`].

mod config;
mod flip;
mod gesture;
mod overlay;
mod spring;
mod stack;
mod viewport;

use std::path::Path;

pub use config::{
    DeckConfig, FlipConfig, OverlayRanges, PressFeedback, FLING_FACTOR,
};
pub use flip::{FlipAxis, FlipOptions};
pub use gesture::GestureOptions;
pub use overlay::{OverlayOptions, OverlayRangeOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spring::{SpringConfig, SpringOptions};
pub use stack::StackOptions;
pub use viewport::ViewportOptions;

use crate::error::DeckError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[springs.back]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct DeckOptions {
    /// Layout area the geometry defaults derive from.
    pub viewport: ViewportOptions,
    /// Drag thresholds, rotation, disabled directions, press feedback.
    pub gesture: GestureOptions,
    /// Overlay label opacity ranges.
    pub overlay: OverlayOptions,
    /// Spring parameters per direction.
    pub springs: SpringOptions,
    /// Window size, looping and stack look.
    pub stack: StackOptions,
    /// Flip reveal animation.
    pub flip: FlipOptions,
}

impl DeckOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(DeckOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DeckError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        toml::from_str(content)
            .map_err(|e| DeckError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DeckError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(DeckError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded deck options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`DeckError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), DeckError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DeckError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DeckError::Io)?;
        }
        std::fs::write(path, content).map_err(DeckError::Io)
    }
}
