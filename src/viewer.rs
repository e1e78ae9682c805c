//! Standalone visualization window backed by winit.
//!
//! [`Viewer`] owns the event loop and drives a [`LissaEngine`] from window
//! events. Embedders that bring their own window and event loop should
//! construct the engine directly instead; this module covers the common case
//! of "open a window and show me the figure".
//!
//! ```no_run
//! # use lissa::Viewer;
//! Viewer::builder()
//!     .with_title("Lissajous")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::LissaError, options::Options, scene::ViewMode, InputEvent,
    LissaEngine, MouseButton,
};

/// Fraction of the primary monitor used for the initial window size.
const WINDOW_SIZE_FRACTION: f64 = 0.75;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    view: Option<ViewMode>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Lissa", default view
    /// mode, default options).
    fn new() -> Self {
        Self {
            options: None,
            view: None,
            title: "Lissa".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Start in `view` instead of [`ViewMode::default`].
    #[must_use]
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = Some(view);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            view: self.view,
            title: self.title,
        }
    }

    /// Shorthand for `build().run()`.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::Viewer`] if the event loop cannot be created or
    /// exits abnormally.
    pub fn run(self) -> Result<(), LissaError> {
        self.build().run()
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A windowed application that renders one engine until the window closes.
pub struct Viewer {
    options: Option<Options>,
    view: Option<ViewMode>,
    title: String,
}

impl Viewer {
    /// Start configuring a viewer.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Run the event loop until the window is closed.
    ///
    /// Blocks the calling thread. The window and engine are created lazily on
    /// the first `resumed` callback, as required on platforms where surfaces
    /// may only exist while the application is active.
    ///
    /// # Errors
    ///
    /// Returns [`LissaError::Viewer`] if the event loop cannot be created or
    /// exits abnormally.
    pub fn run(self) -> Result<(), LissaError> {
        let event_loop =
            EventLoop::new().map_err(|e| LissaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            view: self.view,
            title: self.title,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| LissaError::Viewer(e.to_string()))
    }
}

// ── winit application ────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<LissaEngine>,
    /// Taken on first resume; `None` afterwards.
    options: Option<Options>,
    view: Option<ViewMode>,
    title: String,
}

/// Clamp a window size to the 1x1 minimum the surface accepts.
fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let logical_w = (f64::from(mon_size.width) / scale
                * WINDOW_SIZE_FRACTION) as u32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let logical_h = (f64::from(mon_size.height) / scale
                * WINDOW_SIZE_FRACTION) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let mut engine = match pollster::block_on(LissaEngine::with_options(
            window.clone(),
            size,
            options,
        )) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Some(view) = self.view {
            engine.set_view(view);
        }
        engine.initialize();

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                engine.dispose();
                event_loop.exit();
            }

            WindowEvent::Resized(inner) => {
                let (width, height) = viewport_size(inner);
                engine.resize(width, height);
            }

            WindowEvent::RedrawRequested => {
                engine.update(Instant::now());
                match engine.render() {
                    Ok(()) => {}
                    Err(
                        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                    ) => {
                        let (width, height) =
                            viewport_size(window.inner_size());
                        engine.resize(width, height);
                    }
                    Err(e) => {
                        log::error!("render error: {e:?}");
                    }
                }
                // A disposed engine stops requesting frames; the loop goes
                // quiet until the window closes.
                if !engine.is_disposed() {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
                window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                window.request_redraw();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    #[allow(clippy::cast_possible_truncation)]
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                engine.handle_input(InputEvent::Scroll { delta });
                window.request_redraw();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                engine.handle_input(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        engine.handle_key_press(&format!("{code:?}"));
                        window.request_redraw();
                    }
                }
            }

            _ => (),
        }
    }
}
