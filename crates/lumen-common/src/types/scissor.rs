use serde::{Deserialize, Serialize};

/// Scissor rectangle in pixels with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScissorRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to a top-left origin `(x, y, width, height)` clamped to a
    /// `target_width` × `target_height` render target.
    ///
    /// Returns `None` when nothing of the rectangle lies inside the target.
    pub fn to_top_left(&self, target_width: u32, target_height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x.min(target_width);
        let x1 = self.x.saturating_add(self.width).min(target_width);
        let bottom0 = self.y.min(target_height);
        let bottom1 = self.y.saturating_add(self.height).min(target_height);

        let width = x1 - x0;
        let height = bottom1 - bottom0;
        if width == 0 || height == 0 {
            return None;
        }
        Some((x0, target_height - bottom1, width, height))
    }
}
