//! Keyboard shortcut configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Super.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub toggle_scissor: String,
    pub toggle_stencil: String,
    pub toggle_wireframe: String,
    pub toggle_face_culling: String,
    pub reset_toggles: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_scissor: "Z".into(),
            toggle_stencil: "X".into(),
            toggle_wireframe: "C".into(),
            toggle_face_culling: "V".into(),
            reset_toggles: "R".into(),
            quit: "Escape".into(),
        }
    }
}
