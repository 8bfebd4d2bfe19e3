use lumen_common::Action;

use crate::shader::{PolygonFill, StencilMode};

/// Keyboard-driven render state. Everything starts off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderToggles {
    pub scissor: bool,
    pub stencil: bool,
    pub wireframe: bool,
    pub face_culling: bool,
}

impl RenderToggles {
    /// Apply a toggle action. Returns `false` for actions that are not
    /// render toggles, such as [`Action::Quit`].
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::ToggleScissor => self.scissor = !self.scissor,
            Action::ToggleStencil => self.stencil = !self.stencil,
            Action::ToggleWireframe => self.wireframe = !self.wireframe,
            Action::ToggleFaceCulling => self.face_culling = !self.face_culling,
            Action::ResetToggles => self.reset(),
            Action::Quit => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn polygon(&self) -> PolygonFill {
        if self.wireframe {
            PolygonFill::Line
        } else {
            PolygonFill::Fill
        }
    }

    /// Stencil mode for the balls: they mark the stencil only while
    /// outlines are on.
    pub fn ball_stencil(&self) -> StencilMode {
        if self.stencil {
            StencilMode::Write
        } else {
            StencilMode::Disabled
        }
    }
}
