use crate::error::LissaError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::renderer::figure_set::FigureSet;
use crate::renderer::grid::GridRenderer;
use crate::renderer::line::CurveLineRenderer;
use crate::renderer::points::GlowPointRenderer;

/// All render passes and the per-figure GPU state grouped together.
pub(crate) struct Renderers {
    pub figures: FigureSet,
    pub line: CurveLineRenderer,
    pub glow: GlowPointRenderer,
    pub grid: GridRenderer,
    pub depth: DepthTexture,
}

impl Renderers {
    /// Build every pipeline against the shared camera layout.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, LissaError> {
        let figures = FigureSet::new(context);
        let line = CurveLineRenderer::new(
            context,
            camera_layout,
            figures.layout(),
            shader_composer,
        )?;
        let glow = GlowPointRenderer::new(
            context,
            camera_layout,
            figures.layout(),
            shader_composer,
        )?;
        let grid = GridRenderer::new(context, camera_layout, shader_composer)?;
        let depth = DepthTexture::new(
            &context.device,
            context.width(),
            context.height(),
        );
        Ok(Self {
            figures,
            line,
            glow,
            grid,
            depth,
        })
    }

    /// Recreate the size-dependent depth attachment.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = DepthTexture::new(
            &context.device,
            context.width(),
            context.height(),
        );
    }
}
