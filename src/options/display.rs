use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles and theme colors.
pub struct DisplayOptions {
    /// Whether to render the ground grid and axes box.
    #[schemars(title = "Show Grid")]
    pub show_grid: bool,
    /// Whether to render the glow-noise points.
    #[schemars(title = "Show Glow")]
    pub show_glow: bool,
    /// Background clear color, linear RGB.
    #[schemars(skip)]
    pub background: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_glow: true,
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl DisplayOptions {
    /// Background color as a wgpu clear color.
    #[must_use]
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.background[0]),
            g: f64::from(self.background[1]),
            b: f64::from(self.background[2]),
            a: 1.0,
        }
    }
}
