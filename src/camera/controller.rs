//! Owns the active camera pose and any in-flight viewpoint transition.
//!
//! Pure math: GPU upload lives in
//! [`CameraBinding`](crate::gpu::camera_binding::CameraBinding), so every
//! transition contract here is testable without a device.

use glam::{Quat, Vec2, Vec3};
use web_time::{Duration, Instant};

use super::core::Camera;
use super::transition::{Transition, FLY_IN_START, TRANSITION_DURATION};
use super::viewpoint::Viewpoint;

/// Radians of rotation per pixel of orbit drag.
const ORBIT_SPEED: f32 = 0.01;
/// Distance scale per scroll unit.
const ZOOM_SPEED: f32 = 0.05;
/// Closest the eye may dolly toward the origin.
const MIN_DISTANCE: f32 = 2.0;
/// Farthest the eye may dolly from the origin.
const MAX_DISTANCE: f32 = 100.0;

/// Camera controller: placement, eased viewpoint transitions, and manual
/// orbit/zoom.
///
/// Call [`advance`](Self::advance) once per rendered frame. Manual input
/// (orbit/zoom) cancels an in-flight transition at the camera's current
/// pose before the gesture applies.
pub struct CameraController {
    /// Current camera pose and projection.
    pub camera: Camera,
    transition: Transition,
    transition_duration: Duration,
    orbit_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    moved: bool,
}

impl CameraController {
    /// Controller with the camera resting at the initial viewpoint.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera = Camera::looking_at_origin(
            Viewpoint::Initial.eye(),
            Viewpoint::Initial.up(),
            aspect,
        );
        Self {
            camera,
            transition: Transition::Idle,
            transition_duration: TRANSITION_DURATION,
            orbit_speed: ORBIT_SPEED,
            zoom_speed: ZOOM_SPEED,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            moved: false,
        }
    }

    /// Place the camera at the fly-in pre-position and start the one-time
    /// startup transition toward the given home viewpoint.
    pub fn initialize(&mut self, home: Viewpoint, now: Instant) {
        self.camera.eye = FLY_IN_START;
        self.camera.up = home.up();
        self.camera.target = Vec3::ZERO;
        self.moved = true;
        self.animate_to(home, now);
    }

    /// Cancel any in-flight transition and ease from the current pose to
    /// the named viewpoint.
    pub fn animate_to(&mut self, viewpoint: Viewpoint, now: Instant) {
        self.transition = Transition::start(
            &self.camera,
            viewpoint,
            now,
            self.transition_duration,
        );
    }

    /// Tick the active transition. Once complete the controller is idle
    /// and the camera stays fixed until the next
    /// [`animate_to`](Self::animate_to) or [`initialize`](Self::initialize).
    pub fn advance(&mut self, now: Instant) {
        if self.transition.advance(&mut self.camera, now) {
            self.moved = true;
        }
    }

    /// Whether a viewpoint transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// Orbit the camera around the origin by a mouse-drag delta in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.cancel_transition();

        let mut offset = self.camera.eye - self.camera.target;
        let mut up = self.camera.up;

        // Horizontal rotation around the camera's up vector
        let horizontal =
            Quat::from_axis_angle(up.normalize(), -delta.x * self.orbit_speed);
        offset = horizontal * offset;
        up = horizontal * up;

        // Vertical rotation around the camera's right vector
        let forward = -offset.normalize();
        let right = forward.cross(up).normalize();
        let vertical =
            Quat::from_axis_angle(right, -delta.y * self.orbit_speed);
        offset = vertical * offset;
        up = vertical * up;

        self.camera.eye = self.camera.target + offset;
        self.camera.up = up.normalize();
        self.moved = true;
    }

    /// Dolly the camera along its view direction (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.cancel_transition();

        let offset = self.camera.eye - self.camera.target;
        let distance = (offset.length() * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        self.camera.eye = self.camera.target + offset.normalize() * distance;
        self.moved = true;
    }

    /// Update the projection aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
        self.moved = true;
    }

    /// Distance from the eye to the look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.camera.eye - self.camera.target).length()
    }

    /// Whether the camera changed since the last call; clears the flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Override the transition duration (applies to transitions started
    /// afterwards).
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.transition_duration = duration;
    }

    /// Override orbit and zoom sensitivity.
    pub fn set_sensitivity(&mut self, orbit: f32, zoom: f32) {
        self.orbit_speed = orbit;
        self.zoom_speed = zoom;
    }

    /// Override the dolly distance limits.
    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min;
        self.max_distance = max.max(min);
    }

    fn cancel_transition(&mut self) {
        self.transition = Transition::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_flies_in_to_initial_viewpoint() {
        let mut controller = CameraController::new(1280, 800);
        let start = Instant::now();
        controller.initialize(Viewpoint::Initial, start);
        assert_eq!(controller.camera.eye, FLY_IN_START);
        assert!(controller.is_transitioning());

        controller.advance(start + Duration::from_millis(2500));
        assert!(!controller.is_transitioning());
        assert_eq!(controller.camera.eye, Viewpoint::Initial.eye());
    }

    #[test]
    fn test_advance_is_idempotent_once_settled() {
        let mut controller = CameraController::new(1280, 800);
        let start = Instant::now();
        controller.animate_to(Viewpoint::Top, start);

        controller.advance(start + Duration::from_millis(2000));
        let settled = controller.camera.eye;
        assert_eq!(settled, Viewpoint::Top.eye());

        let _ = controller.take_moved();
        for extra in [2001_u64, 3000, 60_000] {
            controller.advance(start + Duration::from_millis(extra));
            assert_eq!(controller.camera.eye, settled);
        }
        assert!(!controller.take_moved());
    }

    #[test]
    fn test_animate_to_retargets_from_current_pose() {
        let mut controller = CameraController::new(1280, 800);
        let start = Instant::now();
        controller.animate_to(Viewpoint::Front, start);
        controller.advance(start + Duration::from_millis(500));
        let midway = controller.camera.eye;

        // Retarget mid-flight: the new transition starts where the camera
        // is now, not where the old one began.
        controller.animate_to(Viewpoint::Left, start + Duration::from_millis(500));
        controller.advance(start + Duration::from_millis(501));
        let after = controller.camera.eye;
        assert!((after - midway).length() < (Viewpoint::Left.eye() - midway).length());

        controller.advance(start + Duration::from_millis(2600));
        assert_eq!(controller.camera.eye, Viewpoint::Left.eye());
    }

    #[test]
    fn test_orbit_cancels_transition_and_preserves_distance() {
        let mut controller = CameraController::new(1280, 800);
        let start = Instant::now();
        controller.animate_to(Viewpoint::Top, start);
        controller.advance(start + Duration::from_millis(300));
        assert!(controller.is_transitioning());

        let distance = controller.distance();
        controller.orbit(Vec2::new(40.0, 15.0));
        assert!(!controller.is_transitioning());
        assert!((controller.distance() - distance).abs() < 1e-3);

        // Transition stays cancelled: time passing does not resume it.
        let eye = controller.camera.eye;
        controller.advance(start + Duration::from_millis(5000));
        assert_eq!(controller.camera.eye, eye);
    }

    #[test]
    fn test_zoom_clamps_to_distance_limits() {
        let mut controller = CameraController::new(1280, 800);
        for _ in 0..200 {
            controller.zoom(1.0);
        }
        assert!((controller.distance() - MIN_DISTANCE).abs() < 1e-3);

        for _ in 0..200 {
            controller.zoom(-1.0);
        }
        assert!((controller.distance() - MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_take_moved_reports_each_change_once() {
        let mut controller = CameraController::new(1280, 800);
        assert!(!controller.take_moved());

        controller.orbit(Vec2::new(5.0, 0.0));
        assert!(controller.take_moved());
        assert!(!controller.take_moved());
    }
}
