//! Eased camera movement between named viewpoints.
//!
//! The state machine has exactly two states: `Idle` (camera rests where
//! the last movement left it) and `Transitioning` (easing from a captured
//! start pose toward a [`Viewpoint`]). Transitions are driven by elapsed
//! wall-clock time, never by external mutation of the camera.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::core::Camera;
use super::viewpoint::Viewpoint;
use crate::util::easing::EasingFunction;

/// Duration of every viewpoint transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(2000);

/// Pre-position the startup fly-in launches from: three times the initial
/// viewpoint, along the same diagonal.
pub const FLY_IN_START: Vec3 = Vec3::new(30.0, 30.0, 30.0);

/// Camera movement state machine.
#[derive(Debug, Clone)]
pub enum Transition {
    /// No movement in flight.
    Idle,
    /// Easing from a captured pose toward a named viewpoint.
    Transitioning {
        /// Eye position when the transition started.
        from_eye: Vec3,
        /// Up vector when the transition started.
        from_up: Vec3,
        /// Destination viewpoint.
        target: Viewpoint,
        /// When the transition started.
        started: Instant,
        /// Total transition duration.
        duration: Duration,
    },
}

impl Transition {
    /// Begin a transition from the camera's current pose.
    #[must_use]
    pub fn start(
        camera: &Camera,
        target: Viewpoint,
        now: Instant,
        duration: Duration,
    ) -> Self {
        Transition::Transitioning {
            from_eye: camera.eye,
            from_up: camera.up,
            target,
            started: now,
            duration,
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Transition::Transitioning { .. })
    }

    /// Tick the transition and write the interpolated pose into `camera`.
    ///
    /// Returns whether the camera moved. On completion the camera lands
    /// exactly on the target pose and the state returns to `Idle`; further
    /// calls are no-ops.
    pub fn advance(&mut self, camera: &mut Camera, now: Instant) -> bool {
        let Transition::Transitioning {
            from_eye,
            from_up,
            target,
            started,
            duration,
        } = *self
        else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= duration {
            camera.eye = target.eye();
            camera.up = target.up();
            camera.target = Vec3::ZERO;
            *self = Transition::Idle;
            return true;
        }

        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = EasingFunction::DEFAULT.evaluate(t);
        camera.eye = from_eye.lerp(target.eye(), eased);
        camera.up = interpolate_up(from_up, target.up(), eased);
        camera.target = Vec3::ZERO;
        true
    }
}

/// Lerp-and-normalize between up vectors, falling back to the target up
/// when the interpolant degenerates (opposing vectors).
fn interpolate_up(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let up = from.lerp(to, t);
    if up.length_squared() > 1e-6 {
        up.normalize()
    } else {
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::looking_at_origin(FLY_IN_START, Vec3::Y, 1.6)
    }

    #[test]
    fn test_idle_never_moves_the_camera() {
        let mut camera = test_camera();
        let eye = camera.eye;
        let mut transition = Transition::Idle;
        assert!(!transition.advance(&mut camera, Instant::now()));
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn test_midway_pose_lies_between_endpoints() {
        let mut camera = test_camera();
        let start = Instant::now();
        let mut transition = Transition::start(
            &camera,
            Viewpoint::Initial,
            start,
            TRANSITION_DURATION,
        );

        let moved = transition
            .advance(&mut camera, start + Duration::from_millis(1000));
        assert!(moved);
        assert!(transition.is_transitioning());

        // Ease-out at t=0.5 has covered 75% of the way.
        let total = (Viewpoint::Initial.eye() - FLY_IN_START).length();
        let remaining = (Viewpoint::Initial.eye() - camera.eye).length();
        assert!(remaining > 0.0);
        assert!((remaining / total - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_lands_exactly_on_target_after_duration() {
        let mut camera = test_camera();
        let start = Instant::now();
        let mut transition = Transition::start(
            &camera,
            Viewpoint::Top,
            start,
            TRANSITION_DURATION,
        );

        let moved = transition
            .advance(&mut camera, start + Duration::from_millis(2001));
        assert!(moved);
        assert!(!transition.is_transitioning());
        assert_eq!(camera.eye, Viewpoint::Top.eye());
        assert_eq!(camera.up, Viewpoint::Top.up());

        // Settled: another tick changes nothing.
        let moved = transition
            .advance(&mut camera, start + Duration::from_millis(5000));
        assert!(!moved);
        assert_eq!(camera.eye, Viewpoint::Top.eye());
    }

    #[test]
    fn test_look_target_is_always_origin() {
        let mut camera = test_camera();
        camera.target = Vec3::new(3.0, 3.0, 3.0);
        let start = Instant::now();
        let mut transition = Transition::start(
            &camera,
            Viewpoint::Front,
            start,
            TRANSITION_DURATION,
        );
        let _ = transition
            .advance(&mut camera, start + Duration::from_millis(100));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_opposing_up_vectors_fall_back_to_target_up() {
        let up = interpolate_up(Vec3::NEG_Y, Vec3::Y, 0.5);
        assert_eq!(up, Vec3::Y);
    }
}
