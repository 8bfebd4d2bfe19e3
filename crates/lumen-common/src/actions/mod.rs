use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the demo.
///
/// Keybinds resolve to an `Action`; the app routes it to the scene or the
/// event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ToggleScissor,
    ToggleStencil,
    ToggleWireframe,
    ToggleFaceCulling,
    ResetToggles,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::ToggleScissor => "Toggle Scissor Test",
            Action::ToggleStencil => "Toggle Stencil Outline",
            Action::ToggleWireframe => "Toggle Wireframe",
            Action::ToggleFaceCulling => "Toggle Face Culling",
            Action::ResetToggles => "Reset Render State",
            Action::Quit => "Quit",
        }
    }

    pub fn all() -> [Action; 6] {
        [
            Action::ToggleScissor,
            Action::ToggleStencil,
            Action::ToggleWireframe,
            Action::ToggleFaceCulling,
            Action::ResetToggles,
            Action::Quit,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_have_labels() {
        for action in Action::all() {
            assert!(!action.label().is_empty(), "action {action:?} has empty label");
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = Action::all().iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::all().len());
    }
}
