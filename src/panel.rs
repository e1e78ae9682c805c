//! Parameter panel controller.
//!
//! The panel itself (frequency sliders, color picker) belongs to the
//! embedding UI; this object is the narrow seam between that UI and the
//! engine. It owns the panel's visibility state and hands out the
//! [`SharedSettings`] store the panel writes into. One controller per
//! engine, created at construction and disposed exactly once.

use crate::scene::ViewMode;
use crate::settings::SharedSettings;

/// Tracks parameter panel visibility and owns the panel's settings handle.
///
/// The panel is shown in single view and hidden in group view; the engine
/// drives that through [`set_visible_for`](Self::set_visible_for) on every
/// view switch. [`dispose`](Self::dispose) hides the panel and makes every
/// later call a no-op.
#[derive(Debug)]
pub struct PanelController {
    settings: SharedSettings,
    visible: bool,
    disposed: bool,
}

impl PanelController {
    /// A controller for a panel that starts visible (the default view is
    /// single).
    #[must_use]
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            visible: ViewMode::default().shows_panel(),
            disposed: false,
        }
    }

    /// The settings store the panel writes into.
    #[must_use]
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// Whether the panel should currently be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether [`Self::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Apply the panel visibility rule for a view mode.
    pub fn set_visible_for(&mut self, mode: ViewMode) {
        if self.disposed {
            return;
        }
        self.visible = mode.shows_panel();
    }

    /// Hide the panel and detach it for good. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.visible = false;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_view_mode() {
        let mut panel = PanelController::new(SharedSettings::new());
        assert!(panel.is_visible());

        panel.set_visible_for(ViewMode::Group);
        assert!(!panel.is_visible());

        panel.set_visible_for(ViewMode::Single);
        assert!(panel.is_visible());
    }

    #[test]
    fn dispose_hides_and_sticks() {
        let mut panel = PanelController::new(SharedSettings::new());
        panel.dispose();
        assert!(panel.is_disposed());
        assert!(!panel.is_visible());

        // Disposed controllers ignore later visibility changes.
        panel.set_visible_for(ViewMode::Single);
        assert!(!panel.is_visible());

        panel.dispose();
        assert!(panel.is_disposed());
    }
}
