use std::fmt;

/// Failures while bringing up the GPU context. All of them abort
/// construction; no partial context is ever handed out.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not be turned into a wgpu surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter on this system can drive the surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused the device request.
    DeviceRequest(wgpu::RequestDeviceError),
    /// The adapter reports no usable configuration for the surface.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "could not create a rendering surface: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no suitable GPU adapter: {e}")
            }
            Self::DeviceRequest(e) => {
                write!(f, "GPU device unavailable: {e}")
            }
            Self::UnsupportedSurface => {
                write!(f, "surface has no supported configuration")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// The wgpu device, queue, and (optionally) the presentation surface.
///
/// Everything that records or submits GPU work borrows the device and
/// queue from here. The surface is `None` when the context was built from
/// an external device; [`LissaEngine::render_to_texture`] is the render
/// path in that mode.
///
/// [`LissaEngine::render_to_texture`]: crate::LissaEngine::render_to_texture
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    /// Presentation surface, absent in texture-only mode.
    pub surface: Option<wgpu::Surface<'static>>,
    /// Active surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Bring up the full windowed context: surface, adapter, device, and
    /// an initial surface configuration at `size`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderContextError`] naming whichever initialization
    /// step failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Lissa Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let config = Self::surface_config(&surface, &adapter, size)?;
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            surface: Some(surface),
            config,
        })
    }

    /// The adapter's default configuration at the requested size, pinned
    /// to Fifo presentation. Fifo is vsync-capped and universally
    /// supported; the frame limiter does the rest of the pacing.
    fn surface_config(
        surface: &wgpu::Surface<'_>,
        adapter: &wgpu::Adapter,
        (width, height): (u32, u32),
    ) -> Result<wgpu::SurfaceConfiguration, RenderContextError> {
        let mut config = surface
            .get_default_config(adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::Fifo;
        Ok(config)
    }

    /// A surface-less context over an externally-owned device and queue.
    ///
    /// The configuration only records the target format and size; nothing
    /// is presented. Pair with
    /// [`render_to_texture`](crate::LissaEngine::render_to_texture).
    #[must_use]
    pub fn from_device(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
        };
        Self {
            device,
            queue,
            surface: None,
            config,
        }
    }

    /// The render target texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Render target width in physical pixels.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Render target height in physical pixels.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Adopt a new window size and reconfigure the surface. Zero-sized
    /// requests are ignored (minimized windows report 0x0).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
    }

    /// Acquire the next swapchain texture.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the surface is lost, outdated,
    /// or timed out. A surface-less context reports `Lost`; callers treat
    /// that the same way and stop using the presenting path.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        match &self.surface {
            Some(surface) => surface.get_current_texture(),
            None => Err(wgpu::SurfaceError::Lost),
        }
    }

    /// A fresh command encoder for this frame.
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Finish the encoder and hand its commands to the queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}
