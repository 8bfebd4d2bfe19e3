//! Asset path configuration.
//!
//! Relative paths are resolved against `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub root: String,
    pub ball_texture: String,
    pub terrain_texture: String,
    /// Grayscale heightmap for the terrain. Flat terrain when empty.
    pub terrain_heightmap: String,
    /// Cubemap faces in +X, -X, +Y, -Y, +Z, -Z order.
    pub skybox: [String; 6],
    /// Directory holding `<program>.vert.wgsl` / `<program>.frag.wgsl`
    /// overrides. Built-in shaders are used when absent.
    pub shader_dir: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "assets".into(),
            ball_texture: "textures/Gas.png".into(),
            terrain_texture: "textures/Terrain.jpg".into(),
            terrain_heightmap: String::new(),
            skybox: [
                "skybox/right.jpg".into(),
                "skybox/left.jpg".into(),
                "skybox/top.jpg".into(),
                "skybox/bottom.jpg".into(),
                "skybox/back.jpg".into(),
                "skybox/front.jpg".into(),
            ],
            shader_dir: None,
        }
    }
}

impl AssetsConfig {
    /// Resolve an asset path against the asset root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let path = Path::new(relative);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.root).join(path)
        }
    }

    pub fn skybox_paths(&self) -> [PathBuf; 6] {
        std::array::from_fn(|i| self.resolve(&self.skybox[i]))
    }
}
