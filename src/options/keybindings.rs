use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ViewGroup` → `"Digit2"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

// The reverse map is derived state; equality is defined by the bindings
// table alone so deserialized options compare equal before the cache is
// rebuilt.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ViewSingle, "Digit1".into()),
            (KeyAction::ViewGroup, "Digit2".into()),
            (KeyAction::FlyTop, "KeyT".into()),
            (KeyAction::FlyFront, "KeyF".into()),
            (KeyAction::FlyLeft, "KeyL".into()),
            (KeyAction::FlyInitial, "KeyI".into()),
            (KeyAction::FlyFrontUpper, "KeyU".into()),
            (KeyAction::ToggleGrid, "KeyG".into()),
            (KeyAction::ToggleGlow, "KeyN".into()),
            (KeyAction::RecenterCamera, "KeyQ".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
