//! Light sources and their publication into program uniforms.

mod publisher;
mod types;

pub use publisher::publish;
pub use types::*;

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use lumen_config::schema::LightingConfig;

    use super::*;
    use crate::uniforms::{UniformSink, UniformValue};

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(String, UniformValue)>,
    }

    impl UniformSink for RecordingSink {
        fn set_uniform(&mut self, name: &str, value: UniformValue) {
            self.writes.push((name.to_string(), value));
        }
    }

    impl RecordingSink {
        fn get(&self, name: &str) -> Option<UniformValue> {
            self.writes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| *v)
        }
    }

    fn fixture() -> LightingState {
        LightingState {
            directional: DirectionalLight {
                direction: Vec3::new(-1.0, -1.0, 0.0),
                color: Vec3::new(1.0, 1.0, 1.0),
                ambient_strength: 0.02,
                specular_strength: 1.0,
            },
            point: [
                PointLight {
                    position: Vec3::new(-4.0, 4.0, 5.0),
                    color: Vec3::new(0.0, 1.0, 0.0),
                    ambient_strength: 0.03,
                    specular_strength: 1.0,
                    attenuation: Attenuation {
                        constant: 1.0,
                        linear: 0.045,
                        exponent: 0.0075,
                    },
                },
                PointLight {
                    position: Vec3::new(4.0, -4.0, 5.0),
                    color: Vec3::new(1.0, 0.0, 0.0),
                    ambient_strength: 0.25,
                    specular_strength: 0.5,
                    attenuation: Attenuation {
                        constant: 2.0,
                        linear: 0.022,
                        exponent: 0.0019,
                    },
                },
            ],
        }
    }

    #[test]
    fn publish_writes_eighteen_named_slots() {
        let mut sink = RecordingSink::default();
        publish(&mut sink, &fixture());
        assert_eq!(sink.writes.len(), 18);

        let mut names: Vec<&str> = sink.writes.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18, "every write targets a distinct slot");
    }

    #[test]
    fn publish_values_match_state() {
        let state = fixture();
        let mut sink = RecordingSink::default();
        publish(&mut sink, &state);

        let expected = [
            ("PointLights[0].Position", UniformValue::Vec3(Vec3::new(-4.0, 4.0, 5.0))),
            ("PointLights[0].Color", UniformValue::Vec3(Vec3::new(0.0, 1.0, 0.0))),
            ("PointLights[0].AmbientStrength", UniformValue::Float(0.03)),
            ("PointLights[0].LightSpecularStrength", UniformValue::Float(1.0)),
            ("PointLights[0].AttenuationConstant", UniformValue::Float(1.0)),
            ("PointLights[0].AttenuationLinear", UniformValue::Float(0.045)),
            ("PointLights[0].AttenuationExponent", UniformValue::Float(0.0075)),
            ("PointLights[1].Position", UniformValue::Vec3(Vec3::new(4.0, -4.0, 5.0))),
            ("PointLights[1].Color", UniformValue::Vec3(Vec3::new(1.0, 0.0, 0.0))),
            ("PointLights[1].AmbientStrength", UniformValue::Float(0.25)),
            ("PointLights[1].LightSpecularStrength", UniformValue::Float(0.5)),
            ("PointLights[1].AttenuationConstant", UniformValue::Float(2.0)),
            ("PointLights[1].AttenuationLinear", UniformValue::Float(0.022)),
            ("PointLights[1].AttenuationExponent", UniformValue::Float(0.0019)),
            ("DirLight.Direction", UniformValue::Vec3(Vec3::new(-1.0, -1.0, 0.0))),
            ("DirLight.Color", UniformValue::Vec3(Vec3::ONE)),
            ("DirLight.AmbientStrength", UniformValue::Float(0.02)),
            ("DirLight.LightSpecularStrength", UniformValue::Float(1.0)),
        ];

        for (name, value) in expected {
            assert_eq!(sink.get(name), Some(value), "slot {name}");
        }
    }

    #[test]
    fn publish_into_layout_without_lights_is_a_no_op() {
        use crate::uniforms::{UniformKind, UniformLayoutBuilder, UniformStaging};
        use std::sync::Arc;

        let layout = UniformLayoutBuilder::new()
            .field("PVM", UniformKind::Mat4)
            .field("ObjectColor", UniformKind::Vec4)
            .build();
        let mut staging = UniformStaging::new(Arc::new(layout));
        let before = staging.bytes().to_vec();
        publish(&mut staging, &fixture());
        assert_eq!(staging.bytes(), before.as_slice());
    }

    #[test]
    fn default_state_matches_startup_values() {
        let state = LightingState::default();
        assert_eq!(state.point[0].position, Vec3::new(-4.0, 4.0, 5.0));
        assert_eq!(state.point[0].color, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(state.point[1].position, Vec3::new(4.0, -4.0, 5.0));
        assert_eq!(state.point[1].attenuation.linear, 0.022);
        assert_eq!(state.directional.direction, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(state.directional.ambient_strength, 0.02);
    }

    #[test]
    fn short_config_falls_back_to_defaults() {
        let mut config = LightingConfig::default();
        config.point.truncate(1);
        config.point[0].color = [0.0, 0.0, 1.0];
        let state = LightingState::from_config(&config);
        assert_eq!(state.point[0].color, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(state.point[1], LightingState::default().point[1]);
    }

    #[test]
    fn attenuation_factor() {
        let att = Attenuation {
            constant: 1.0,
            linear: 0.5,
            exponent: 0.25,
        };
        assert!((att.factor(0.0) - 1.0).abs() < 1e-6);
        assert!((att.factor(2.0) - 1.0 / 3.0).abs() < 1e-6);
    }
}
