/// A raw pointer or modifier event, decoupled from any window library.
///
/// The viewer (or an embedding event loop) translates platform events into
/// these and feeds them to
/// [`LissaEngine::handle_input`](crate::LissaEngine::handle_input), which
/// routes them through the [`InputProcessor`](super::InputProcessor):
///
/// ```ignore
/// engine.handle_input(InputEvent::CursorMoved { x, y });
/// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved. Drives hover picking when no button is held and
    /// camera orbit during a left drag.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A mouse button changed state.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// The scroll wheel turned. Positive deltas dolly toward the origin.
    Scroll {
        /// Scroll amount in wheel lines.
        delta: f32,
    },
    /// The keyboard modifier state changed.
    ModifiersChanged {
        /// Whether shift is held.
        shift: bool,
    },
}

/// Mouse button identity, reduced to the three the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button; held drags orbit the camera.
    Left,
    /// Secondary button.
    Right,
    /// Wheel click.
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            // Side and extension buttons act like the primary button.
            _ => Self::Left,
        }
    }
}
