//! Curve line renderer.
//!
//! Draws each visible figure's sampled points as a line strip, one draw
//! per figure with the figure uniform bound at group 1.

use crate::error::LissaError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::renderer::figure_set::FigureSet;
use crate::renderer::pipeline_util;

/// Line-strip pipeline over the figure vertex buffers.
pub struct CurveLineRenderer {
    pipeline: wgpu::RenderPipeline,
}

impl CurveLineRenderer {
    /// Build the line pipeline against the shared camera and figure
    /// layouts.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::Shader`] if the line shader fails to compose.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        figure_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, LissaError> {
        let shader = shader_composer.compose(
            &context.device,
            "Curve Line Shader",
            include_str!("../../assets/shaders/curve_line.wgsl"),
            "curve_line.wgsl",
        )?;

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Curve Line Pipeline Layout"),
                bind_group_layouts: &[camera_layout, figure_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Curve Line Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[pipeline_util::curve_vertex_layout()],
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
                    topology: wgpu::PrimitiveTopology::LineStrip,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self { pipeline })
    }

    /// Draw every visible figure's line strip.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
        figures: &'a FigureSet,
    ) {
        if !figures.any_visible() {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);

        for figure in figures.visible_figures() {
            // A strip needs at least two points.
            if figure.vertex_count() < 2 {
                continue;
            }
            render_pass.set_bind_group(1, figure.bind_group(), &[]);
            render_pass
                .set_vertex_buffer(0, figure.vertex_buffer().slice(..));
            render_pass.draw(0..figure.vertex_count(), 0..1);
        }
    }
}
