//! Ground grid and axes box renderer.
//!
//! Static line-list geometry built once at startup: a 10×10 reference grid
//! on the XZ plane plus a 2×2×2 wireframe box around the origin marking
//! the single figure's amplitude envelope. Vertices carry their own color
//! so both shapes share one pipeline and one draw.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::error::LissaError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::renderer::pipeline_util;
use crate::settings::DEFAULT_CURVE_COLOR;

/// Grid side length in world units.
const GRID_SIZE: f32 = 10.0;

/// Number of grid cells per side.
const GRID_DIVISIONS: u32 = 10;

/// Axes box side length.
const BOX_SIZE: f32 = 2.0;

/// Grid line color (theme 0x644040).
const GRID_COLOR: [f32; 3] = [100.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0];

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GridVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl GridVertex {
    const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }
    }
}

fn push_line(vertices: &mut Vec<GridVertex>, a: Vec3, b: Vec3, color: [f32; 3]) {
    vertices.push(GridVertex {
        position: a.to_array(),
        color,
    });
    vertices.push(GridVertex {
        position: b.to_array(),
        color,
    });
}

/// Grid lines on the XZ plane followed by the twelve box edges.
fn build_vertices() -> Vec<GridVertex> {
    let mut vertices = Vec::new();

    let half = GRID_SIZE / 2.0;
    let step = GRID_SIZE / GRID_DIVISIONS as f32;
    for k in 0..=GRID_DIVISIONS {
        let offset = -half + k as f32 * step;
        push_line(
            &mut vertices,
            Vec3::new(offset, 0.0, -half),
            Vec3::new(offset, 0.0, half),
            GRID_COLOR,
        );
        push_line(
            &mut vertices,
            Vec3::new(-half, 0.0, offset),
            Vec3::new(half, 0.0, offset),
            GRID_COLOR,
        );
    }

    let h = BOX_SIZE / 2.0;
    let corners = |y: f32| {
        [
            Vec3::new(-h, y, -h),
            Vec3::new(h, y, -h),
            Vec3::new(h, y, h),
            Vec3::new(-h, y, h),
        ]
    };
    let bottom = corners(-h);
    let top = corners(h);
    for i in 0..4 {
        let j = (i + 1) % 4;
        push_line(&mut vertices, bottom[i], bottom[j], DEFAULT_CURVE_COLOR);
        push_line(&mut vertices, top[i], top[j], DEFAULT_CURVE_COLOR);
        push_line(&mut vertices, bottom[i], top[i], DEFAULT_CURVE_COLOR);
    }

    vertices
}

/// Line-list pipeline over the static grid/box vertex buffer.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl GridRenderer {
    /// Build the grid pipeline and upload the static geometry.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::Shader`] if the grid shader fails to compose.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, LissaError> {
        let vertices = build_vertices();
        let vertex_buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Grid Vertex Buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });

        let shader = shader_composer.compose(
            &context.device,
            "Grid Shader",
            include_str!("../../assets/shaders/grid.wgsl"),
            "grid.wgsl",
        )?;

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Grid Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Grid Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[GridVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_fragment_targets(
                        context.format(),
                    ),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        })
    }

    /// Draw the grid and axes box.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
