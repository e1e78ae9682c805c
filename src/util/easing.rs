//! Easing functions for animation interpolation.
//!
//! Shapes the rate of change of camera transitions and other timed
//! effects. All functions are cheap enough to evaluate every frame.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
}

impl EasingFunction {
    /// Default easing: quadratic ease-out, the shape used by every
    /// viewpoint transition.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns the eased value, also in
    /// [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25); // 0.5² = 0.25
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out_is_monotonic() {
        let quad_out = EasingFunction::QuadraticOut;
        let mut prev = 0.0;
        for step in 1..=100 {
            let eased = quad_out.evaluate(step as f32 / 100.0);
            assert!(
                eased >= prev,
                "ease-out must not reverse: f({}) = {} < {}",
                step as f32 / 100.0,
                eased,
                prev
            );
            prev = eased;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_quadratic_out_front_loads_progress() {
        // Ease-out covers more than half the distance by the midpoint.
        let quad_out = EasingFunction::QuadraticOut;
        assert!(quad_out.evaluate(0.25) > 0.25);
        assert!(quad_out.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_input_clamping() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(-0.5), 0.0);
        assert_eq!(quad_out.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_default_is_quadratic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticOut);
    }
}
