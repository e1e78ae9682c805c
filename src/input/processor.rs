//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! button and modifier state).  It is the only thing that sits between raw
//! window events and the engine's
//! [`execute`](crate::LissaEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::command::EngineCommand;

/// Converts raw window events into [`EngineCommand`]s.
///
/// Left-button drags orbit the camera, the scroll wheel zooms, and plain
/// cursor movement reports the pointer position for hover picking.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last seen cursor position in physical pixels.
    mouse_pos: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// A processor with no buttons held and the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<EngineCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(EngineCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: orbit while the left button is held, otherwise report
    /// the position for hover picking.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<EngineCommand> {
        let next = Vec2::new(x, y);
        let delta = next - self.mouse_pos;
        self.mouse_pos = next;

        if self.mouse_pressed {
            return Some(EngineCommand::Orbit { delta });
        }
        Some(EngineCommand::PointerMoved { x, y })
    }

    /// Left-button press/release.  Release re-reports the pointer so hover
    /// state is not stale after an orbit drag.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<EngineCommand> {
        if button != MouseButton::Left {
            return None;
        }
        self.mouse_pressed = pressed;
        if pressed {
            return None;
        }
        Some(EngineCommand::PointerMoved {
            x: self.mouse_pos.x,
            y: self.mouse_pos.y,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(processor: &mut InputProcessor) {
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
    }

    #[test]
    fn plain_move_reports_pointer() {
        let mut processor = InputProcessor::new();
        let cmd = processor
            .handle_event(InputEvent::CursorMoved { x: 120.0, y: 80.0 });
        assert_eq!(cmd, Some(EngineCommand::PointerMoved { x: 120.0, y: 80.0 }));
        assert_eq!(processor.mouse_pos(), Vec2::new(120.0, 80.0));
    }

    #[test]
    fn left_drag_orbits() {
        let mut processor = InputProcessor::new();
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        press(&mut processor);
        let cmd = processor
            .handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 });
        assert_eq!(
            cmd,
            Some(EngineCommand::Orbit {
                delta: Vec2::new(10.0, -5.0)
            })
        );
    }

    #[test]
    fn release_refreshes_pointer() {
        let mut processor = InputProcessor::new();
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 50.0, y: 60.0 });
        press(&mut processor);
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 55.0, y: 65.0 });
        let cmd = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(cmd, Some(EngineCommand::PointerMoved { x: 55.0, y: 65.0 }));
        assert!(!processor.mouse_pressed());
    }

    #[test]
    fn scroll_zooms() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(InputEvent::Scroll { delta: 1.5 });
        assert_eq!(cmd, Some(EngineCommand::Zoom { delta: 1.5 }));
    }

    #[test]
    fn right_button_is_ignored() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(cmd, None);
        assert!(!processor.mouse_pressed());
    }
}
