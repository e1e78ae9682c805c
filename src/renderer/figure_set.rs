//! Per-figure GPU resources shared by the line and glow passes.
//!
//! Each [`CurveFigure`] gets a vertex buffer for its sampled points, a
//! second vertex buffer for its glow-noise points, and a small uniform
//! carrying placement, color, and time. [`FigureSet::sync`] moves dirty
//! CPU-side geometry into those buffers once per frame; the draw passes
//! then iterate the set without touching scene state.

use std::collections::HashMap;

use bytemuck::Zeroable;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::curve::NOISE_COPIES;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::scene::CurveFigure;

/// Per-figure shader uniform, bound at group 1 by the line and glow
/// pipelines.
///
/// Layout must match the `FigureUniform` WGSL struct (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FigureUniform {
    /// Model matrix: grid placement and miniature scale.
    pub model: [[f32; 4]; 4],
    /// Line color, linear RGB.
    pub color: [f32; 3],
    /// Figure-local animation time in seconds.
    pub time: f32,
}

impl FigureUniform {
    fn from_figure(figure: &CurveFigure) -> Self {
        let model = Mat4::from_translation(figure.position)
            * Mat4::from_scale(Vec3::splat(figure.scale));
        Self {
            model: model.to_cols_array_2d(),
            color: figure.color,
            time: figure.time,
        }
    }
}

/// GPU state for one figure: geometry buffers plus the uniform bind group.
pub struct FigureGpu {
    vertices: TypedBuffer<Vec3>,
    glow: TypedBuffer<Vec3>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    visible: bool,
}

impl FigureGpu {
    fn new(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        point_count: usize,
    ) -> Self {
        let vertices = TypedBuffer::with_capacity(
            &context.device,
            "Figure Vertex Buffer",
            point_count,
            wgpu::BufferUsages::VERTEX,
        );
        let glow = TypedBuffer::with_capacity(
            &context.device,
            "Figure Glow Buffer",
            point_count * NOISE_COPIES,
            wgpu::BufferUsages::VERTEX,
        );

        let uniform_buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Figure Uniform Buffer"),
                    contents: bytemuck::cast_slice(&[FigureUniform::zeroed()]),
                    usage: wgpu::BufferUsages::UNIFORM
                        | wgpu::BufferUsages::COPY_DST,
                });

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                    label: Some("Figure Bind Group"),
                });

        Self {
            vertices,
            glow,
            uniform_buffer,
            bind_group,
            visible: false,
        }
    }

    /// Bind group carrying this figure's uniform.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Vertex buffer holding the sampled curve points.
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        self.vertices.buffer()
    }

    /// Number of curve points currently uploaded.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.count() as u32
    }

    /// Vertex buffer holding the glow-noise points.
    pub fn glow_buffer(&self) -> &wgpu::Buffer {
        self.glow.buffer()
    }

    /// Number of glow points currently uploaded (zero until the first
    /// regeneration window opens).
    pub fn glow_count(&self) -> u32 {
        self.glow.count() as u32
    }
}

/// All per-figure GPU state, keyed by figure name.
pub struct FigureSet {
    layout: wgpu::BindGroupLayout,
    figures: HashMap<String, FigureGpu>,
}

impl FigureSet {
    /// Create an empty set and the figure-uniform bind group layout shared
    /// by the line and glow pipelines.
    pub fn new(context: &RenderContext) -> Self {
        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Figure Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );
        Self {
            layout,
            figures: HashMap::new(),
        }
    }

    /// Layout for the per-figure uniform at group 1.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Upload dirty geometry and refreshed uniforms for every visible
    /// figure, creating GPU state for figures seen for the first time.
    ///
    /// Hidden figures keep their dirty flags so a later reveal uploads the
    /// pending geometry.
    pub fn sync<'a>(
        &mut self,
        context: &RenderContext,
        figures: impl Iterator<Item = &'a mut CurveFigure>,
    ) {
        for figure in figures {
            if !self.figures.contains_key(&figure.name) {
                let gpu = FigureGpu::new(
                    context,
                    &self.layout,
                    figure.sample().point_count(),
                );
                let _ = self.figures.insert(figure.name.clone(), gpu);
            }
            let Some(gpu) = self.figures.get_mut(&figure.name) else {
                continue;
            };

            gpu.visible = figure.visible;
            if !figure.visible {
                continue;
            }

            if figure.take_geometry_dirty() {
                let _ = gpu.vertices.write(
                    &context.device,
                    &context.queue,
                    figure.sample().points(),
                );
            }
            if figure.take_noise_dirty() {
                if let Some(noise) = figure.sample().noise_points() {
                    let _ =
                        gpu.glow.write(&context.device, &context.queue, noise);
                }
            }

            let uniform = FigureUniform::from_figure(figure);
            context.queue.write_buffer(
                &gpu.uniform_buffer,
                0,
                bytemuck::cast_slice(&[uniform]),
            );
        }
    }

    /// Iterate the figures marked visible by the last [`Self::sync`].
    pub fn visible_figures(&self) -> impl Iterator<Item = &FigureGpu> {
        self.figures.values().filter(|f| f.visible)
    }

    /// Whether any figure is currently visible.
    pub fn any_visible(&self) -> bool {
        self.figures.values().any(|f| f.visible)
    }

    /// Drop all per-figure GPU state.
    pub fn clear(&mut self) {
        self.figures.clear();
    }
}
