//! Configuration schema types for Lumen.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the demo's built-in values.

mod assets;
mod camera;
mod keybind_config;
mod lighting;
mod logging;
mod render;
mod scene;
mod terrain;
mod window;

pub use assets::*;
pub use camera::*;
pub use keybind_config::*;
pub use lighting::*;
pub use logging::*;
pub use render::*;
pub use scene::*;
pub use terrain::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Lumen.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LumenConfig {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub scene: SceneConfig,
    pub terrain: TerrainConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub assets: AssetsConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let config = LumenConfig::default();
        assert_eq!(config.window.title, "Lumen");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 800);
        assert!(config.window.vsync);
    }

    #[test]
    fn default_render_state() {
        let config = LumenConfig::default();
        assert_eq!(config.render.clear_color, "#ff00ff");
        assert_eq!(config.render.scissor.x, 200);
        assert_eq!(config.render.scissor.y, 200);
        assert_eq!(config.render.scissor.width, 400);
        assert_eq!(config.render.scissor.height, 400);
    }

    #[test]
    fn default_scene() {
        let config = LumenConfig::default();
        assert_eq!(config.scene.ball_count, 10);
        assert!((config.scene.ball_radius - 0.7).abs() < f32::EPSILON);
        assert!((config.scene.outline_radius - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.scene.fidelity, 50);
        assert!((config.scene.rotation_step_degrees - 0.5).abs() < f32::EPSILON);
        assert!(config.scene.seed.is_none());
        assert!(!config.scene.mirror.enabled);
    }

    #[test]
    fn default_lighting_matches_startup_values() {
        let lighting = LightingConfig::default();
        assert_eq!(lighting.point.len(), 2);

        let green = &lighting.point[0];
        assert_eq!(green.position, [-4.0, 4.0, 5.0]);
        assert_eq!(green.color, [0.0, 1.0, 0.0]);
        assert!((green.attenuation.linear - 0.045).abs() < f32::EPSILON);
        assert!((green.attenuation.exponent - 0.0075).abs() < f32::EPSILON);

        let red = &lighting.point[1];
        assert_eq!(red.position, [4.0, -4.0, 5.0]);
        assert_eq!(red.color, [1.0, 0.0, 0.0]);
        assert!((red.attenuation.linear - 0.022).abs() < f32::EPSILON);
        assert!((red.attenuation.exponent - 0.0019).abs() < f32::EPSILON);

        assert_eq!(lighting.directional.direction, [-1.0, -1.0, 0.0]);
        assert!((lighting.directional.ambient_strength - 0.02).abs() < f32::EPSILON);
    }

    #[test]
    fn default_keybinds() {
        let kb = KeybindConfig::default();
        assert_eq!(kb.toggle_scissor, "Z");
        assert_eq!(kb.toggle_stencil, "X");
        assert_eq!(kb.toggle_wireframe, "C");
        assert_eq!(kb.toggle_face_culling, "V");
        assert_eq!(kb.reset_toggles, "R");
        assert_eq!(kb.quit, "Escape");
    }

    #[test]
    fn assets_resolve_relative_to_root() {
        let assets = AssetsConfig::default();
        let p = assets.resolve("textures/Gas.png");
        assert_eq!(p, std::path::Path::new("assets").join("textures/Gas.png"));
        assert_eq!(assets.skybox_paths()[0], std::path::Path::new("assets").join("skybox/right.jpg"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: LumenConfig = toml::from_str(
            r#"
[scene]
fidelity = 12
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.scene.fidelity, 12);
        assert_eq!(config.scene.seed, Some(7));
        assert_eq!(config.scene.ball_count, 10);
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn point_lights_from_array_of_tables() {
        let config: LumenConfig = toml::from_str(
            r#"
[[lighting.point]]
position = [1.0, 2.0, 3.0]
color = [0.0, 0.0, 1.0]

[[lighting.point]]
position = [0.0, 0.0, 0.0]
"#,
        )
        .unwrap();
        assert_eq!(config.lighting.point.len(), 2);
        assert_eq!(config.lighting.point[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(config.lighting.point[0].color, [0.0, 0.0, 1.0]);
        // Unspecified fields fall back to per-light defaults
        assert!((config.lighting.point[1].attenuation.constant - 1.0).abs() < f32::EPSILON);
    }
}
