//! Parametric Lissajous curve sampling.
//!
//! A figure is traced by independent sinusoidal motion on each axis:
//! point *i* is `(xA·sin(a·i + xφ), yA·sin(b·i + yφ), zA·sin(c·i + zφ))`,
//! uniformly scaled by [`BASE_SCALE`]. The raw sample index, not `i/N`,
//! is the time variable, so the visual complexity of a figure is tied to
//! its point count.
//!
//! Sampling overwrites a fixed-length buffer in place; the hot path
//! ([`CurveSample::resample`]) runs once per rendered frame for the active
//! figure and never allocates.

use rand::Rng;
use web_time::Duration;

use glam::Vec3;

/// Uniform scale applied to every sampled point to normalize visual size.
pub const BASE_SCALE: f32 = 2.0;

/// Point count for the full-resolution figure shown in single view.
pub const FULL_POINT_COUNT: usize = 6000;

/// Point count for the miniature figures shown in grid view.
pub const MINIATURE_POINT_COUNT: usize = 5000;

/// Jittered glow copies emitted per sampled point.
pub const NOISE_COPIES: usize = 4;

/// Per-axis jitter magnitude for glow points.
pub const NOISE_SCALE: f32 = BASE_SCALE * 0.025;

/// Width of one glow regeneration window in milliseconds.
const NOISE_WINDOW_MS: u128 = 50;

// ── Parameters ───────────────────────────────────────────────────────────

/// Per-axis amplitude, angular frequency, and phase for one figure.
///
/// A plain value type: mutated only by replacement, never in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// X-axis amplitude (≥ 0).
    pub x_amplitude: f32,
    /// Y-axis amplitude (≥ 0).
    pub y_amplitude: f32,
    /// Z-axis amplitude (≥ 0).
    pub z_amplitude: f32,
    /// X-axis angular frequency.
    pub x_frequency: f32,
    /// Y-axis angular frequency.
    pub y_frequency: f32,
    /// Z-axis angular frequency.
    pub z_frequency: f32,
    /// X-axis phase offset in radians.
    pub x_phase: f32,
    /// Y-axis phase offset in radians.
    pub y_phase: f32,
    /// Z-axis phase offset in radians.
    pub z_phase: f32,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            x_amplitude: 1.0,
            y_amplitude: 1.0,
            z_amplitude: 1.0,
            x_frequency: 1.0,
            y_frequency: 0.25,
            z_frequency: 0.5,
            x_phase: 0.0,
            y_phase: 0.0,
            z_phase: 0.0,
        }
    }
}

impl CurveParameters {
    /// Default parameters with the given per-axis frequencies.
    #[must_use]
    pub fn with_frequencies(x: f32, y: f32, z: f32) -> Self {
        Self {
            x_frequency: x,
            y_frequency: y,
            z_frequency: z,
            ..Self::default()
        }
    }

    /// Magnitude of the amplitude vector, before [`BASE_SCALE`].
    ///
    /// No sampled point can lie farther from the figure origin than
    /// `amplitude_envelope() * BASE_SCALE`; picking uses this as a
    /// bounding-sphere radius.
    #[must_use]
    pub fn amplitude_envelope(&self) -> f32 {
        Vec3::new(self.x_amplitude, self.y_amplitude, self.z_amplitude)
            .length()
    }

    /// Evaluate the curve at sample index `i`.
    #[inline]
    fn point_at(&self, i: f32) -> Vec3 {
        Vec3::new(
            self.x_amplitude * (self.x_frequency * i + self.x_phase).sin(),
            self.y_amplitude * (self.y_frequency * i + self.y_phase).sin(),
            self.z_amplitude * (self.z_frequency * i + self.z_phase).sin(),
        ) * BASE_SCALE
    }
}

// ── Sample buffers ───────────────────────────────────────────────────────

/// A fixed-length sequence of sampled curve points, with an optional glow
/// buffer of [`NOISE_COPIES`] jittered copies per point.
///
/// The point count is fixed at construction and never changes; resampling
/// and noise regeneration overwrite the existing buffers.
pub struct CurveSample {
    points: Vec<Vec3>,
    noise: Option<Vec<Vec3>>,
}

impl CurveSample {
    /// An all-zero sample of `point_count` points, without a glow buffer.
    #[must_use]
    pub fn new(point_count: usize) -> Self {
        Self {
            points: vec![Vec3::ZERO; point_count],
            noise: None,
        }
    }

    /// An all-zero sample of `point_count` points plus a glow buffer of
    /// `point_count × NOISE_COPIES` points.
    #[must_use]
    pub fn with_glow(point_count: usize) -> Self {
        Self {
            points: vec![Vec3::ZERO; point_count],
            noise: Some(vec![Vec3::ZERO; point_count * NOISE_COPIES]),
        }
    }

    /// Construct a sample of `point_count` points and fill it from
    /// `params`.
    #[must_use]
    pub fn sample(params: &CurveParameters, point_count: usize) -> Self {
        let mut s = Self::new(point_count);
        s.resample(params);
        s
    }

    /// Overwrite every point from `params`.
    ///
    /// Deterministic: identical parameters produce bit-identical points.
    /// Never resizes or reallocates the buffer.
    pub fn resample(&mut self, params: &CurveParameters) {
        for (i, point) in self.points.iter_mut().enumerate() {
            *point = params.point_at(i as f32);
        }
    }

    /// Regenerate the glow buffer when the elapsed-time gate is open.
    ///
    /// The gate quantizes `elapsed` into 50 ms windows and regenerates
    /// only during odd windows; even windows keep the previous buffer.
    /// The alternation reads as a flicker/pulse rather than continuous
    /// jitter. Returns whether the buffer changed (callers skip the GPU
    /// upload otherwise). A sample built without a glow buffer always
    /// returns `false`.
    pub fn update_noise(&mut self, elapsed: Duration) -> bool {
        let Some(noise) = self.noise.as_mut() else {
            return false;
        };
        if (elapsed.as_millis() / NOISE_WINDOW_MS) % 2 == 0 {
            return false;
        }

        let mut rng = rand::rng();
        for (i, source) in self.points.iter().enumerate() {
            for copy in &mut noise[i * NOISE_COPIES..(i + 1) * NOISE_COPIES] {
                *copy = *source
                    + Vec3::new(
                        rng.random::<f32>() * NOISE_SCALE,
                        rng.random::<f32>() * NOISE_SCALE,
                        rng.random::<f32>() * NOISE_SCALE,
                    );
            }
        }
        true
    }

    /// The sampled points, in index order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The glow buffer, if this sample carries one.
    #[must_use]
    pub fn noise_points(&self) -> Option<&[Vec3]> {
        self.noise.as_deref()
    }

    /// Number of primary sample points (fixed at construction).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_params() -> CurveParameters {
        CurveParameters {
            x_amplitude: 1.0,
            y_amplitude: 1.0,
            z_amplitude: 1.0,
            x_frequency: 1.0,
            y_frequency: 1.0,
            z_frequency: 1.0,
            x_phase: 0.0,
            y_phase: 0.0,
            z_phase: 0.0,
        }
    }

    #[test]
    fn test_index_zero_is_origin_for_zero_phases() {
        let sample = CurveSample::sample(&unit_params(), 16);
        assert_eq!(sample.points()[0], Vec3::ZERO);
    }

    #[test]
    fn test_index_is_the_time_variable() {
        // Point 1 must evaluate the sine at t = 1 (the raw index), not at
        // t = 1/N.
        let sample = CurveSample::sample(&unit_params(), 16);
        let expected = 1.0_f32.sin() * BASE_SCALE;
        assert!((sample.points()[1].x - expected).abs() < 1e-6);
        assert!((sample.points()[1].y - expected).abs() < 1e-6);
        assert!((sample.points()[1].z - expected).abs() < 1e-6);
    }

    #[test]
    fn test_resample_is_deterministic() {
        let params = CurveParameters::default();
        let a = CurveSample::sample(&params, 512);
        let b = CurveSample::sample(&params, 512);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_resample_overwrites_without_reallocating() {
        let mut sample = CurveSample::new(FULL_POINT_COUNT);
        let before = sample.points.as_ptr();
        sample.resample(&CurveParameters::default());
        sample.resample(&CurveParameters::with_frequencies(0.3, 0.7, 0.9));
        assert_eq!(sample.points.as_ptr(), before);
        assert_eq!(sample.point_count(), FULL_POINT_COUNT);
    }

    #[test]
    fn test_point_count_invariant_across_parameters() {
        let cases = [
            CurveParameters::default(),
            CurveParameters::with_frequencies(0.0, 0.0, 0.0),
            CurveParameters::with_frequencies(-3.0, 12.5, 0.001),
            CurveParameters {
                x_amplitude: 0.0,
                y_amplitude: 0.0,
                z_amplitude: 0.0,
                ..CurveParameters::default()
            },
        ];
        for params in cases {
            let sample = CurveSample::sample(&params, MINIATURE_POINT_COUNT);
            assert_eq!(sample.point_count(), MINIATURE_POINT_COUNT);
        }
    }

    #[test]
    fn test_amplitude_bounds_every_point() {
        let params = CurveParameters::default();
        let bound = params.amplitude_envelope() * BASE_SCALE + 1e-4;
        let sample = CurveSample::sample(&params, 2048);
        for point in sample.points() {
            assert!(point.length() <= bound);
        }
    }

    #[test]
    fn test_noise_gate_closed_during_even_windows() {
        let mut sample = CurveSample::with_glow(64);
        sample.resample(&unit_params());

        // elapsed 20 ms → window 0 (even): gate closed, buffer untouched.
        let changed = sample.update_noise(Duration::from_millis(20));
        assert!(!changed);
        let frozen: Vec<Vec3> =
            sample.noise_points().unwrap_or_default().to_vec();

        // elapsed 120 ms → window 2 (even): still closed.
        assert!(!sample.update_noise(Duration::from_millis(120)));
        assert_eq!(sample.noise_points().unwrap_or_default(), &frozen[..]);
    }

    #[test]
    fn test_noise_gate_open_during_odd_windows() {
        let mut sample = CurveSample::with_glow(64);
        sample.resample(&unit_params());

        // elapsed 70 ms → window 1 (odd): regenerated.
        assert!(sample.update_noise(Duration::from_millis(70)));
        let noise = sample.noise_points().unwrap_or_default();
        assert_eq!(noise.len(), 64 * NOISE_COPIES);

        // Every glow point stays within [0, NOISE_SCALE) of its source on
        // each axis.
        for (i, copy) in noise.iter().enumerate() {
            let source = sample.points()[i / NOISE_COPIES];
            let offset = *copy - source;
            for axis in [offset.x, offset.y, offset.z] {
                assert!((0.0..NOISE_SCALE).contains(&axis));
            }
        }
    }

    #[test]
    fn test_sample_without_glow_never_reports_changes() {
        let mut sample = CurveSample::sample(&unit_params(), 64);
        assert!(!sample.update_noise(Duration::from_millis(70)));
        assert!(sample.noise_points().is_none());
    }

    #[test]
    fn test_zero_amplitude_collapses_to_origin() {
        let params = CurveParameters {
            x_amplitude: 0.0,
            y_amplitude: 0.0,
            z_amplitude: 0.0,
            ..CurveParameters::default()
        };
        let sample = CurveSample::sample(&params, 32);
        assert!(sample.points().iter().all(|p| *p == Vec3::ZERO));
    }
}
