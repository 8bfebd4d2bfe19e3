use std::collections::HashMap;

use lumen_common::actions::Action;
use lumen_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings = [
            (&config.toggle_scissor, Action::ToggleScissor),
            (&config.toggle_stencil, Action::ToggleStencil),
            (&config.toggle_wireframe, Action::ToggleWireframe),
            (&config.toggle_face_culling, Action::ToggleFaceCulling),
            (&config.reset_toggles, Action::ResetToggles),
            (&config.quit, Action::Quit),
        ];

        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Display string for an action's keybind, if bound.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    /// One `"<key>: <label>"` line per action, in [`Action::all`] order.
    pub fn help_lines(&self) -> Vec<String> {
        Action::all()
            .iter()
            .filter_map(|action| {
                self.keybind_for_action(*action)
                    .map(|key| format!("{key}: {}", action.label()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
