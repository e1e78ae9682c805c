//! The scene engine: GPU construction, the frame loop, and command
//! execution.

mod accessors;
pub(crate) mod command;
mod input;
mod options;
pub(crate) mod renderers;
mod view;

use glam::Vec2;
use web_time::Instant;

pub use command::EngineCommand;

use self::renderers::Renderers;
use crate::camera::CameraController;
use crate::error::LissaError;
use crate::gpu::camera_binding::CameraBinding;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::panel::PanelController;
use crate::scene::{SceneConfig, SceneState, ViewMode};
use crate::settings::{SettingsSource, SharedSettings};
use crate::util::frame_timing::FrameTiming;

/// Target FPS limit
const TARGET_FPS: u32 = 300;

/// The core engine: Lissajous figures, camera flight, hover picking, and
/// rendering.
///
/// # Construction
///
/// Use [`LissaEngine::new`] for a window surface with default options,
/// [`LissaEngine::with_options`] to configure at startup, or
/// [`LissaEngine::from_context`] to embed against an externally-owned
/// `wgpu::Device` (see [`RenderContext::from_device`]).
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) then [`render`](Self::render).
/// Call [`resize`](Self::resize) when the window size changes. Input is
/// forwarded via [`handle_input`](Self::handle_input) and
/// [`handle_key_press`](Self::handle_key_press); everything dispatches
/// through [`execute`](Self::execute).
///
/// # Lifecycle
///
/// [`dispose`](Self::dispose) tears the scene down and turns every later
/// call into a no-op; the viewer stops scheduling redraws once
/// [`is_disposed`](Self::is_disposed) reports true.
pub struct LissaEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    _shader_composer: ShaderComposer,

    camera: CameraController,
    camera_binding: CameraBinding,
    scene: SceneState,
    settings: SharedSettings,
    panel: PanelController,
    input: InputProcessor,
    options: Options,
    frame_timing: FrameTiming,
    renderers: Renderers,
    /// Engine epoch; drives the glow-noise regeneration gate.
    started: Instant,
    /// Timestamp of the previous [`update`](Self::update) call.
    last_update: Instant,
    /// Last reported pointer position in physical pixels.
    pointer: Option<Vec2>,
    disposed: bool,
}

// =============================================================================
// Construction
// =============================================================================

impl LissaEngine {
    /// Engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError`] if GPU initialization or shader composition
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, LissaError> {
        Self::with_options(window, size, Options::default()).await
    }

    /// Engine with explicit startup options.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError`] if GPU initialization or shader composition
    /// fails.
    pub async fn with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, LissaError> {
        let context = RenderContext::new(window, size).await?;
        Self::init_with_context(context, options)
    }

    /// Engine from a pre-built [`RenderContext`] (for embedding or
    /// surface-less rendering via
    /// [`render_to_texture`](Self::render_to_texture)).
    ///
    /// # Errors
    ///
    /// Returns [`LissaError`] if shader composition fails.
    pub fn from_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, LissaError> {
        Self::init_with_context(context, options)
    }

    /// Shared construction logic for both windowed and headless modes.
    fn init_with_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, LissaError> {
        let mut shader_composer = ShaderComposer::new()?;
        let camera = CameraController::new(context.width(), context.height());
        let camera_binding = CameraBinding::new(&context);
        let renderers = Renderers::new(
            &context,
            &camera_binding.layout,
            &mut shader_composer,
        )?;

        // Startup curve values seed the live settings store once; after
        // this, the store belongs to the embedding UI.
        let settings = SharedSettings::new();
        settings.set_frequencies(
            options.curve.x_frequency,
            options.curve.y_frequency,
            options.curve.z_frequency,
        );
        let scene = SceneState::with_config(SceneConfig {
            full_point_count: options.curve.full_point_count,
            miniature_point_count: options.curve.miniature_point_count,
            grid_spacing: options.curve.grid_spacing,
            figure_scale: options.curve.figure_scale,
        });
        let panel = PanelController::new(settings.clone());

        let now = Instant::now();
        let mut engine = Self {
            context,
            _shader_composer: shader_composer,
            camera,
            camera_binding,
            scene,
            settings,
            panel,
            input: InputProcessor::new(),
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
            renderers,
            started: now,
            last_update: now,
            pointer: None,
            disposed: false,
        };
        engine.scene.set_view(ViewMode::default());
        engine.apply_options();
        Ok(engine)
    }

    /// Place the camera at the fly-in position and start the startup
    /// transition toward the active view's home viewpoint.
    pub fn initialize(&mut self) {
        if self.disposed {
            return;
        }
        let home = self.scene.mode().viewpoint();
        self.camera.initialize(home, Instant::now());
    }
}

// =============================================================================
// Frame loop
// =============================================================================

impl LissaEngine {
    /// Advance one frame of simulation: poll the settings store, resample
    /// the active figure, tick the camera transition, and refresh hover
    /// state if the camera moved.
    ///
    /// Call once per frame before [`render`](Self::render):
    /// ```ignore
    /// engine.update(Instant::now());
    /// engine.render()?;
    /// ```
    pub fn update(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        // One settings snapshot per frame.
        let snapshot = self.settings.snapshot();
        let elapsed = now.duration_since(self.started);
        self.scene.advance_frame(&snapshot, dt, elapsed);

        self.camera.advance(now);
        if self.camera.take_moved() {
            self.scene.camera_changed();
            // The figure under a stationary cursor changes as the camera
            // moves; re-run the pick at the last known pointer position.
            if let Some(pointer) = self.pointer {
                self.run_pick(pointer);
            }
        }
    }

    /// Upload everything the draw passes read: the camera uniform and any
    /// dirty figure geometry.
    fn pre_render(&mut self) {
        self.camera_binding
            .update(&self.context.queue, &self.camera.camera);
        self.renderers
            .figures
            .sync(&self.context, self.scene.figures_mut());
    }

    /// Encode the main render pass: curve lines, the reference grid, then
    /// the additive glow overlay against a read-only depth buffer.
    fn encode_main_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let mut render_pass =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(
                            self.options.display.clear_color(),
                        ),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.renderers.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

        self.renderers.line.draw(
            &mut render_pass,
            &self.camera_binding.bind_group,
            &self.renderers.figures,
        );
        if self.options.display.show_grid {
            self.renderers
                .grid
                .draw(&mut render_pass, &self.camera_binding.bind_group);
        }
        if self.options.display.show_glow {
            self.renderers.glow.draw(
                &mut render_pass,
                &self.camera_binding.bind_group,
                &self.renderers.figures,
            );
        }
    }

    /// Execute one frame: upload dirty state, draw, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if self.disposed || !self.frame_timing.should_render() {
            return Ok(());
        }

        self.pre_render();

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        self.encode_main_pass(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }

    /// Render into a caller-owned texture view (embedding without a
    /// surface). No present happens.
    pub fn render_to_texture(&mut self, view: &wgpu::TextureView) {
        if self.disposed {
            return;
        }
        self.pre_render();
        let mut encoder = self.context.create_encoder();
        self.encode_main_pass(&mut encoder, view);
        self.context.submit(encoder);
        self.frame_timing.end_frame();
    }

    /// Resize the surface, depth attachment, and camera projection to
    /// match the new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera.resize(width, height);
            self.renderers.resize(&self.context);
        }
    }
}
