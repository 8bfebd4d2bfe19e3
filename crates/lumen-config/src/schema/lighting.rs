//! Light source configuration types.
//!
//! Defaults reproduce the fixed startup lighting: a white directional light
//! and a green and a red point light.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttenuationConfig {
    pub constant: f32,
    pub linear: f32,
    pub exponent: f32,
}

impl Default for AttenuationConfig {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.045,
            exponent: 0.0075,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub direction: [f32; 3],
    pub color: [f32; 3],
    pub ambient_strength: f32,
    pub specular_strength: f32,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            direction: [-1.0, -1.0, 0.0],
            color: [1.0, 1.0, 1.0],
            ambient_strength: 0.02,
            specular_strength: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub attenuation: AttenuationConfig,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
            ambient_strength: 0.03,
            specular_strength: 1.0,
            attenuation: AttenuationConfig::default(),
        }
    }
}

/// Process-wide lighting: one directional light and exactly two point lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub directional: DirectionalLightConfig,
    pub point: Vec<PointLightConfig>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional: DirectionalLightConfig::default(),
            point: vec![
                PointLightConfig {
                    position: [-4.0, 4.0, 5.0],
                    color: [0.0, 1.0, 0.0],
                    ambient_strength: 0.03,
                    specular_strength: 1.0,
                    attenuation: AttenuationConfig {
                        constant: 1.0,
                        linear: 0.045,
                        exponent: 0.0075,
                    },
                },
                PointLightConfig {
                    position: [4.0, -4.0, 5.0],
                    color: [1.0, 0.0, 0.0],
                    ambient_strength: 0.03,
                    specular_strength: 1.0,
                    attenuation: AttenuationConfig {
                        constant: 1.0,
                        linear: 0.022,
                        exponent: 0.0019,
                    },
                },
            ],
        }
    }
}
