use glam::Vec3;

use crate::curve::{CurveParameters, CurveSample, BASE_SCALE};
use crate::picking::PickCandidate;
use crate::settings::DEFAULT_CURVE_COLOR;

// ---------------------------------------------------------------------------
// CurveFigure
// ---------------------------------------------------------------------------

/// One placed Lissajous figure: a sampled curve plus scene metadata.
///
/// The name is the figure's stable identity; picking and hover reporting
/// carry it back out of the scene along with the figure's parameters.
pub struct CurveFigure {
    /// Stable identity, e.g. `lissajous-single` or `lissajous-group-3`.
    pub name: String,
    /// Whether the figure renders and participates in picking.
    pub visible: bool,
    /// Line color as RGB components in [0, 1].
    pub color: [f32; 3],
    /// Accumulated time value fed to the shader effects.
    pub time: f32,
    /// World-space position of the figure origin.
    pub position: Vec3,
    /// Uniform scale applied on top of the sampled geometry.
    pub scale: f32,
    params: CurveParameters,
    sample: CurveSample,
    geometry_dirty: bool,
    noise_dirty: bool,
}

impl CurveFigure {
    /// A figure sampled at `point_count` points, placed at the origin at
    /// full scale, carrying a glow buffer.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        params: CurveParameters,
        point_count: usize,
    ) -> Self {
        let mut sample = CurveSample::with_glow(point_count);
        sample.resample(&params);
        Self {
            name: name.into(),
            visible: true,
            color: DEFAULT_CURVE_COLOR,
            time: 0.0,
            position: Vec3::ZERO,
            scale: 1.0,
            params,
            sample,
            geometry_dirty: true,
            noise_dirty: false,
        }
    }

    /// The parameters that produced the current sample.
    #[must_use]
    pub fn parameters(&self) -> CurveParameters {
        self.params
    }

    /// The sampled geometry.
    #[must_use]
    pub fn sample(&self) -> &CurveSample {
        &self.sample
    }

    /// Replace the parameters and resample in place.
    pub fn set_parameters(&mut self, params: CurveParameters) {
        self.params = params;
        self.sample.resample(&self.params);
        self.geometry_dirty = true;
    }

    /// Replace only the per-axis frequencies and resample.
    pub fn set_frequencies(&mut self, x: f32, y: f32, z: f32) {
        self.set_parameters(CurveParameters {
            x_frequency: x,
            y_frequency: y,
            z_frequency: z,
            ..self.params
        });
    }

    /// Set the display color. Never touches geometry.
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color;
    }

    /// Advance the shader time uniform by `dt` seconds.
    pub fn advance_time(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Tick the glow buffer's regeneration gate.
    pub fn update_noise(&mut self, elapsed: web_time::Duration) {
        if self.sample.update_noise(elapsed) {
            self.noise_dirty = true;
        }
    }

    /// Whether the point buffer changed since the last take. Clears the
    /// flag.
    pub fn take_geometry_dirty(&mut self) -> bool {
        std::mem::take(&mut self.geometry_dirty)
    }

    /// Whether the glow buffer changed since the last take. Clears the
    /// flag.
    pub fn take_noise_dirty(&mut self) -> bool {
        std::mem::take(&mut self.noise_dirty)
    }

    /// World-space bounding-sphere radius: no sampled point, scaled and
    /// placed, can lie farther than this from [`Self::position`].
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.scale * self.params.amplitude_envelope() * BASE_SCALE
    }

    /// This figure's entry in a picking candidate list.
    #[must_use]
    pub fn pick_candidate(&self) -> PickCandidate<'_> {
        PickCandidate {
            name: &self.name,
            center: self.position,
            radius: self.bounding_radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::MINIATURE_POINT_COUNT;

    #[test]
    fn test_bounding_radius_scales_with_placement() {
        let mut figure = CurveFigure::new(
            "figure",
            CurveParameters::default(),
            MINIATURE_POINT_COUNT,
        );
        let full = figure.bounding_radius();
        figure.scale = 0.35;
        assert!((figure.bounding_radius() - full * 0.35).abs() < 1e-6);

        // Default amplitudes are (1, 1, 1): envelope √3, times BASE_SCALE.
        let expected = 0.35 * 3.0_f32.sqrt() * BASE_SCALE;
        assert!((figure.bounding_radius() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_set_color_leaves_geometry_alone() {
        let mut figure =
            CurveFigure::new("figure", CurveParameters::default(), 128);
        let _ = figure.take_geometry_dirty();
        let before = figure.sample().points().to_vec();

        figure.set_color([1.0, 0.0, 0.0]);
        assert_eq!(figure.color, [1.0, 0.0, 0.0]);
        assert_eq!(figure.sample().points(), &before[..]);
        assert!(!figure.take_geometry_dirty());
    }

    #[test]
    fn test_frequency_change_marks_geometry_dirty() {
        let mut figure =
            CurveFigure::new("figure", CurveParameters::default(), 128);
        assert!(figure.take_geometry_dirty());
        assert!(!figure.take_geometry_dirty());

        let before = figure.sample().points().to_vec();
        figure.set_frequencies(0.9, 0.9, 0.9);
        assert!(figure.take_geometry_dirty());
        assert_ne!(figure.sample().points(), &before[..]);
        assert_eq!(figure.parameters().x_frequency, 0.9);
    }

    #[test]
    fn test_noise_dirty_follows_the_regeneration_gate() {
        let mut figure =
            CurveFigure::new("figure", CurveParameters::default(), 64);
        figure.update_noise(web_time::Duration::from_millis(20));
        assert!(!figure.take_noise_dirty());
        figure.update_noise(web_time::Duration::from_millis(70));
        assert!(figure.take_noise_dirty());
        assert!(!figure.take_noise_dirty());
    }
}
