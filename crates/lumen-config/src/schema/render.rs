//! Render-state configuration types.

use lumen_common::ScissorRect;
use serde::{Deserialize, Serialize};

/// Frame-level render settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Colour the frame is cleared to, as `#rrggbb`.
    pub clear_color: String,
    /// Scissor rectangle used while the scissor toggle is on (bottom-left origin).
    pub scissor: ScissorRect,
    /// Specular exponent pushed as `Shininess` with every lit draw.
    pub shininess: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: "#ff00ff".into(),
            scissor: ScissorRect::new(200, 200, 400, 400),
            shininess: 32.0,
        }
    }
}
