use crate::uniforms::{UniformSink, UniformValue};

use super::types::LightingState;

/// Write every light field into `sink` under the shader naming scheme:
/// `PointLights[i].<Field>` for each point light, then `DirLight.<Field>`.
///
/// Programs without light slots simply ignore the writes.
pub fn publish(sink: &mut impl UniformSink, state: &LightingState) {
    for (i, light) in state.point.iter().enumerate() {
        let mut set = |field: &str, value: UniformValue| {
            sink.set_uniform(&format!("PointLights[{i}].{field}"), value);
        };
        set("Position", light.position.into());
        set("Color", light.color.into());
        set("AmbientStrength", light.ambient_strength.into());
        set("LightSpecularStrength", light.specular_strength.into());
        set("AttenuationConstant", light.attenuation.constant.into());
        set("AttenuationLinear", light.attenuation.linear.into());
        set("AttenuationExponent", light.attenuation.exponent.into());
    }

    let dir = &state.directional;
    sink.set_uniform("DirLight.Direction", dir.direction.into());
    sink.set_uniform("DirLight.Color", dir.color.into());
    sink.set_uniform("DirLight.AmbientStrength", dir.ambient_strength.into());
    sink.set_uniform("DirLight.LightSpecularStrength", dir.specular_strength.into());
}
