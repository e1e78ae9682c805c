//! Input dispatch for [`LissaEngine`].

use super::command::EngineCommand;
use super::LissaEngine;
use crate::input::InputEvent;

impl LissaEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the processor turns them into
    /// commands and the engine executes them.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.disposed {
            return;
        }
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Resolve a physical key press through the keybinding table and
    /// execute the bound command, if any.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format:
    /// `"Digit1"`, `"KeyG"`, etc.
    pub fn handle_key_press(&mut self, key: &str) {
        if self.disposed {
            return;
        }
        if let Some(action) = self.options.keybindings.lookup(key) {
            self.execute(action.to_command());
        }
    }

    /// Execute a single engine command.
    ///
    /// The single entry point behind every keyboard, mouse, and
    /// programmatic operation.
    pub fn execute(&mut self, command: EngineCommand) {
        if self.disposed {
            return;
        }
        match command {
            EngineCommand::SetView(mode) => self.set_view(mode),
            EngineCommand::FlyTo(viewpoint) => self.fly_to(viewpoint),
            EngineCommand::RecenterCamera => self.recenter_camera(),
            EngineCommand::Orbit { delta } => self.camera.orbit(delta),
            EngineCommand::Zoom { delta } => self.camera.zoom(delta),
            EngineCommand::PointerMoved { x, y } => self.pointer_moved(x, y),
            EngineCommand::ToggleGrid => self.toggle_grid(),
            EngineCommand::ToggleGlow => self.toggle_glow(),
        }
    }
}
