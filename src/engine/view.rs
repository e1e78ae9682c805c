//! View switching, camera flight, and pointer routing for
//! [`LissaEngine`].

use glam::Vec2;
use web_time::Instant;

use super::LissaEngine;
use crate::camera::Viewpoint;
use crate::error::LissaError;
use crate::picking;
use crate::scene::ViewMode;

impl LissaEngine {
    /// Activate a view mode: swap figure visibility, apply the panel
    /// visibility rule, and fly the camera to the view's home viewpoint.
    ///
    /// Re-activating the current mode re-runs the flight but builds
    /// nothing new.
    pub fn set_view(&mut self, mode: ViewMode) {
        if self.disposed {
            return;
        }
        self.scene.set_view(mode);
        self.panel.set_visible_for(mode);
        self.camera.animate_to(mode.viewpoint(), Instant::now());
    }

    /// [`set_view`](Self::set_view) with a mode name from the string
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::InvalidViewMode`] for unrecognized names; the
    /// engine state is unchanged.
    pub fn set_view_named(&mut self, name: &str) -> Result<(), LissaError> {
        let mode = name.parse::<ViewMode>()?;
        self.set_view(mode);
        Ok(())
    }

    /// Ease the camera from its current pose to a named viewpoint.
    pub fn fly_to(&mut self, viewpoint: Viewpoint) {
        if self.disposed {
            return;
        }
        self.camera.animate_to(viewpoint, Instant::now());
    }

    /// [`fly_to`](Self::fly_to) with a viewpoint name from the string
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::InvalidViewpoint`] for unrecognized names; the
    /// engine state is unchanged.
    pub fn fly_to_named(&mut self, name: &str) -> Result<(), LissaError> {
        let viewpoint = name.parse::<Viewpoint>()?;
        self.fly_to(viewpoint);
        Ok(())
    }

    /// Fly back to the active view's home viewpoint.
    pub fn recenter_camera(&mut self) {
        self.fly_to(self.scene.mode().viewpoint());
    }

    /// Report a new pointer position and re-run hover picking there.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.disposed {
            return;
        }
        let pixel = Vec2::new(x, y);
        self.pointer = Some(pixel);
        self.run_pick(pixel);
    }

    /// Convert a pixel position to NDC and hand it to the scene's picker.
    pub(super) fn run_pick(&mut self, pixel: Vec2) {
        let viewport = (self.context.width(), self.context.height());
        let ndc = picking::screen_to_ndc(pixel, viewport);
        self.scene.pointer_moved(ndc, &self.camera.camera);
    }
}
