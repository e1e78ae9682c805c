//! Camera system for 3D scene viewing.
//!
//! An origin-locked camera with named viewpoints, eased transitions
//! between them, and manual orbit/zoom.

/// Camera controller: placement, transitions, orbit, zoom.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Eased movement state machine between viewpoints.
pub mod transition;
/// The fixed table of named viewpoints.
pub mod viewpoint;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
pub use viewpoint::Viewpoint;
