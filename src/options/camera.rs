use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 30.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit sensitivity in radians per dragged pixel.
    #[schemars(title = "Orbit Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub orbit_speed: f32,
    /// Zoom sensitivity per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.2), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the eye may dolly toward the origin.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the eye may dolly from the origin.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Viewpoint transition duration in milliseconds.
    #[schemars(title = "Transition Duration", range(min = 200, max = 5000), extend("step" = 100))]
    pub transition_ms: u64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            orbit_speed: 0.01,
            zoom_speed: 0.05,
            min_distance: 2.0,
            max_distance: 100.0,
            transition_ms: 2000,
        }
    }
}
