use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::curve::{FULL_POINT_COUNT, MINIATURE_POINT_COUNT};
use crate::scene::{GROUP_FIGURE_SCALE, GROUP_GRID_SPACING};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Curve", inline)]
#[serde(default)]
/// Startup curve parameters and group-grid placement.
pub struct CurveOptions {
    /// Initial X-axis frequency for the single figure.
    #[schemars(title = "X Frequency", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub x_frequency: f32,
    /// Initial Y-axis frequency for the single figure.
    #[schemars(title = "Y Frequency", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub y_frequency: f32,
    /// Initial Z-axis frequency for the single figure.
    #[schemars(title = "Z Frequency", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub z_frequency: f32,
    /// Point count for the single-view figure.
    #[schemars(skip)]
    pub full_point_count: usize,
    /// Point count for each miniature grid figure.
    #[schemars(skip)]
    pub miniature_point_count: usize,
    /// World-space distance between adjacent grid cells in group view.
    #[schemars(skip)]
    pub grid_spacing: f32,
    /// Uniform scale applied to miniature grid figures.
    #[schemars(skip)]
    pub figure_scale: f32,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            x_frequency: 1.0,
            y_frequency: 0.25,
            z_frequency: 0.5,
            full_point_count: FULL_POINT_COUNT,
            miniature_point_count: MINIATURE_POINT_COUNT,
            grid_spacing: GROUP_GRID_SPACING,
            figure_scale: GROUP_FIGURE_SCALE,
        }
    }
}
