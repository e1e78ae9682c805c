//! Live curve settings store.
//!
//! The embedding UI writes frequency and color values here; the engine
//! pulls one [`Settings`] snapshot per frame and applies it to the active
//! figure. The engine never writes back, so the store is a one-way seam
//! between the UI layer and the frame loop.

use std::sync::{Arc, Mutex};

/// Default curve color, `#00BA88` as RGB components.
pub const DEFAULT_CURVE_COLOR: [f32; 3] = [0.0, 186.0 / 255.0, 136.0 / 255.0];

/// One frame's worth of user-tunable curve settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Angular frequency on the X axis.
    pub x_frequency: f32,
    /// Angular frequency on the Y axis.
    pub y_frequency: f32,
    /// Angular frequency on the Z axis.
    pub z_frequency: f32,
    /// Curve line color as RGB components in [0, 1].
    pub color: [f32; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x_frequency: 1.0,
            y_frequency: 0.25,
            z_frequency: 0.5,
            color: DEFAULT_CURVE_COLOR,
        }
    }
}

/// Anything the engine can poll for the current settings.
///
/// The engine calls [`SettingsSource::snapshot`] exactly once per frame.
pub trait SettingsSource {
    /// The current settings values.
    fn snapshot(&self) -> Settings;
}

impl SettingsSource for Settings {
    fn snapshot(&self) -> Settings {
        *self
    }
}

/// Cloneable handle to a settings store shared between the UI and the
/// engine. All clones observe the same values.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<Mutex<Settings>>,
}

impl SharedSettings {
    /// Create a store holding the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole settings value.
    pub fn set(&self, settings: Settings) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = settings;
        }
    }

    /// Set the three axis frequencies.
    pub fn set_frequencies(&self, x: f32, y: f32, z: f32) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.x_frequency = x;
            guard.y_frequency = y;
            guard.z_frequency = z;
        }
    }

    /// Set the curve color.
    pub fn set_color(&self, color: [f32; 3]) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.color = color;
        }
    }
}

impl SettingsSource for SharedSettings {
    fn snapshot(&self) -> Settings {
        self.inner
            .lock()
            .map(|guard| *guard)
            .unwrap_or_default()
    }
}
