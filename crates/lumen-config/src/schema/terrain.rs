//! Terrain mesh settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub enabled: bool,
    /// Grid cells along each side.
    pub cells: u32,
    /// World-space edge length.
    pub size: f32,
    /// Height of a fully white heightmap texel.
    pub height_scale: f32,
    /// World position of the grid's first corner.
    pub position: [f32; 3],
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cells: 64,
            size: 20.0,
            height_scale: 2.0,
            position: [-10.0, -3.0, -10.0],
        }
    }
}
