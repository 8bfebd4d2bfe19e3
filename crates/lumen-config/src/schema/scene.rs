//! Scene population settings.

use serde::{Deserialize, Serialize};

/// Optional reflective sphere rendered with the environment cubemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    pub enabled: bool,
    pub radius: f32,
    pub position: [f32; 3],
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 0.25,
            position: [0.0, 0.0, 0.0],
        }
    }
}

/// Sphere population of the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ball_count: u32,
    pub ball_radius: f32,
    /// Radius of the enlarged copy drawn for the stencil outline.
    pub outline_radius: f32,
    pub outline_color: [f32; 3],
    pub fidelity: u32,
    /// Rotation added on every `update`, in degrees.
    pub rotation_step_degrees: f32,
    /// Seed for ball placement. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
    pub mirror: MirrorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ball_count: 10,
            ball_radius: 0.7,
            outline_radius: 0.8,
            outline_color: [1.0, 0.5, 0.0],
            fidelity: 50,
            rotation_step_degrees: 0.5,
            seed: None,
            mirror: MirrorConfig::default(),
        }
    }
}
