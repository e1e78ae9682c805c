//! Centralized runtime options with TOML support.
//!
//! All tweakable settings (camera projection and controls, display
//! toggles, startup curve parameters, keybindings) are consolidated here.
//! Options serialize to/from TOML; the JSON schema describes the
//! UI-exposed subset for an embedding panel.

mod camera;
mod curve;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use curve::CurveOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LissaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Display toggles and theme colors.
    pub display: DisplayOptions,
    /// Startup curve parameters and group-grid placement.
    pub curve: CurveOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::Io`] if the file cannot be read and
    /// [`LissaError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, LissaError> {
        let content = std::fs::read_to_string(path).map_err(LissaError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| LissaError::OptionsParse(e.to_string()))?;
        // The reverse map is #[serde(skip)] and deserializes empty.
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::OptionsParse`] if serialization fails and
    /// [`LissaError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LissaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LissaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LissaError::Io)?;
        }
        std::fs::write(path, content).map_err(LissaError::Io)
    }
}
