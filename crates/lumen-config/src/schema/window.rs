//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lumen".into(),
            width: 800,
            height: 800,
            vsync: true,
        }
    }
}
