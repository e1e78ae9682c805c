use serde::{Deserialize, Serialize};

use crate::camera::Viewpoint;
use crate::engine::command::EngineCommand;
use crate::scene::ViewMode;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so the options TOML stays
/// readable:
/// ```toml
/// [keybindings.bindings]
/// view_group = "Digit2"
/// toggle_grid = "KeyG"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch to the single-figure view.
    ViewSingle,
    /// Switch to the group grid view.
    ViewGroup,
    /// Fly to the top-down viewpoint.
    FlyTop,
    /// Fly to the front viewpoint.
    FlyFront,
    /// Fly to the left viewpoint.
    FlyLeft,
    /// Fly to the initial diagonal viewpoint.
    FlyInitial,
    /// Fly to the raised front viewpoint.
    FlyFrontUpper,
    /// Toggle the reference grid and bounding box.
    ToggleGrid,
    /// Toggle the glow point overlay.
    ToggleGlow,
    /// Fly back to the active view's home viewpoint.
    RecenterCamera,
}

impl KeyAction {
    /// Convert to the corresponding parameterless [`EngineCommand`].
    #[must_use]
    pub fn to_command(self) -> EngineCommand {
        match self {
            Self::ViewSingle => EngineCommand::SetView(ViewMode::Single),
            Self::ViewGroup => EngineCommand::SetView(ViewMode::Group),
            Self::FlyTop => EngineCommand::FlyTo(Viewpoint::Top),
            Self::FlyFront => EngineCommand::FlyTo(Viewpoint::Front),
            Self::FlyLeft => EngineCommand::FlyTo(Viewpoint::Left),
            Self::FlyInitial => EngineCommand::FlyTo(Viewpoint::Initial),
            Self::FlyFrontUpper => EngineCommand::FlyTo(Viewpoint::FrontUpper),
            Self::ToggleGrid => EngineCommand::ToggleGrid,
            Self::ToggleGlow => EngineCommand::ToggleGlow,
            Self::RecenterCamera => EngineCommand::RecenterCamera,
        }
    }
}
