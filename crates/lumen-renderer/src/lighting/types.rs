use glam::Vec3;
use lumen_config::schema::{
    AttenuationConfig, DirectionalLightConfig, LightingConfig, PointLightConfig,
};

/// Number of point lights every lit program declares.
pub const POINT_LIGHT_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub ambient_strength: f32,
    pub specular_strength: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub exponent: f32,
}

impl Attenuation {
    /// `1 / (c + l·d + e·d²)`.
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.exponent * distance * distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub attenuation: Attenuation,
}

/// One directional light and a fixed set of point lights, shared read-only
/// by every object for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingState {
    pub directional: DirectionalLight,
    pub point: [PointLight; POINT_LIGHT_COUNT],
}

impl Default for LightingState {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}

impl LightingState {
    /// Build from config. Missing point lights fall back to the defaults and
    /// extras are ignored; validation normally rejects both cases.
    pub fn from_config(config: &LightingConfig) -> Self {
        let defaults = LightingConfig::default();
        let point = std::array::from_fn(|i| {
            let light = config
                .point
                .get(i)
                .or_else(|| defaults.point.get(i))
                .cloned()
                .unwrap_or_default();
            PointLight::from(&light)
        });

        Self {
            directional: DirectionalLight::from(&config.directional),
            point,
        }
    }
}

impl From<&DirectionalLightConfig> for DirectionalLight {
    fn from(c: &DirectionalLightConfig) -> Self {
        Self {
            direction: Vec3::from_array(c.direction),
            color: Vec3::from_array(c.color),
            ambient_strength: c.ambient_strength,
            specular_strength: c.specular_strength,
        }
    }
}

impl From<&AttenuationConfig> for Attenuation {
    fn from(c: &AttenuationConfig) -> Self {
        Self {
            constant: c.constant,
            linear: c.linear,
            exponent: c.exponent,
        }
    }
}

impl From<&PointLightConfig> for PointLight {
    fn from(c: &PointLightConfig) -> Self {
        Self {
            position: Vec3::from_array(c.position),
            color: Vec3::from_array(c.color),
            ambient_strength: c.ambient_strength,
            specular_strength: c.specular_strength,
            attenuation: Attenuation::from(&c.attenuation),
        }
    }
}
