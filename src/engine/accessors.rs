//! Read-only query methods and lifecycle helpers for [`LissaEngine`].

use super::LissaEngine;
use crate::options::Options;
use crate::panel::PanelController;
use crate::scene::{CurveFigure, HoverReader, SceneState, ViewMode};
use crate::settings::SharedSettings;

// ── Lifecycle ──

impl LissaEngine {
    /// Tear the engine down: dispose the scene and panel, release figure
    /// GPU state, and turn every later call into a no-op. Safe to call
    /// more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scene.dispose();
        self.panel.dispose();
        self.renderers.figures.clear();
        self.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

// ── Scene & camera queries ──

impl LissaEngine {
    /// The active view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.scene.mode()
    }

    /// Read-only access to the scene state.
    #[must_use]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// The hovered miniature figure, if any.
    #[must_use]
    pub fn hovered_figure(&self) -> Option<&CurveFigure> {
        self.scene.hovered_figure()
    }

    /// Hand the read side of the hover channel to the embedding UI.
    /// Returns `None` after the first call.
    pub fn take_hover_reader(&mut self) -> Option<HoverReader> {
        self.scene.take_hover_reader()
    }

    /// Whether a viewpoint transition is in flight.
    #[must_use]
    pub fn is_camera_transitioning(&self) -> bool {
        self.camera.is_transitioning()
    }
}

// ── Settings & panel ──

impl LissaEngine {
    /// The live settings store shared with the embedding UI.
    #[must_use]
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// The parameter panel controller.
    #[must_use]
    pub fn panel(&self) -> &PanelController {
        &self.panel
    }

    /// Mutable access to the panel controller for the UI composer.
    pub fn panel_mut(&mut self) -> &mut PanelController {
        &mut self.panel
    }
}

// ── Query (read-only state inspection) ──

impl LissaEngine {
    /// Current surface size in physical pixels `(width, height)`.
    #[must_use]
    pub fn screen_size(&self) -> (u32, u32) {
        (self.context.width(), self.context.height())
    }

    /// Current frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Read-only access to the current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
