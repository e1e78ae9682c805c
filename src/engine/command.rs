//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as an `EngineCommand`.
//! Consumers construct commands and pass them to
//! [`LissaEngine::execute`](super::LissaEngine::execute).

use glam::Vec2;

use crate::camera::Viewpoint;
use crate::scene::ViewMode;

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively.  The engine never cares *how* a command was triggered —
/// keyboard, mouse, or API all look identical:
///
/// ```ignore
/// engine.execute(EngineCommand::SetView(ViewMode::Group));
/// engine.execute(EngineCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Start an eased flight to a named viewpoint.
    FlyTo(Viewpoint),

    /// Fly back to the active view's home viewpoint.
    RecenterCamera,

    /// Orbit the camera by `delta` pixels of mouse movement.
    Orbit {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── View ────────────────────────────────────────────────────────
    /// Switch between the single-figure and group presentations.
    SetView(ViewMode),

    // ── Pointer ─────────────────────────────────────────────────────
    /// Cursor moved to a new position; drives hover picking.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    // ── Display toggles ─────────────────────────────────────────────
    /// Show or hide the reference grid and bounding box.
    ToggleGrid,

    /// Enable or disable the glow point overlay.
    ToggleGlow,
}
