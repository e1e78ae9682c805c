//! Options methods for [`LissaEngine`].

use web_time::Duration;

use super::LissaEngine;
use crate::options::Options;

impl LissaEngine {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera controller.
    ///
    /// Display options are read directly at draw time. Curve options seed
    /// the settings store at construction only, so live slider values
    /// survive an options swap.
    pub fn apply_options(&mut self) {
        let co = &self.options.camera;
        self.camera.camera.fovy = co.fovy;
        self.camera.camera.znear = co.znear;
        self.camera.camera.zfar = co.zfar;
        self.camera.set_sensitivity(co.orbit_speed, co.zoom_speed);
        self.camera.set_zoom_limits(co.min_distance, co.max_distance);
        self.camera
            .set_transition_duration(Duration::from_millis(co.transition_ms));
    }

    /// Toggle the reference grid and bounding box.
    pub fn toggle_grid(&mut self) {
        self.options.display.show_grid = !self.options.display.show_grid;
    }

    /// Toggle the glow point overlay.
    pub fn toggle_glow(&mut self) {
        self.options.display.show_glow = !self.options.display.show_glow;
    }
}
