//! Render passes for the Lissajous scene.
//!
//! Three pipelines share the camera bind group at group 0: the curve line
//! strip, the additive glow points, and the static reference grid. The
//! line and glow passes additionally share per-figure state managed by
//! [`figure_set::FigureSet`].

/// Per-figure GPU buffers and uniforms.
pub mod figure_set;
/// Ground grid and axes box.
pub mod grid;
/// Curve line strips.
pub mod line;
pub(crate) mod pipeline_util;
/// Glow-noise points.
pub mod points;
