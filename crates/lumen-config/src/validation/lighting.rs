//! Light source validation.

use crate::schema::LumenConfig;

use super::helpers::{validate_finite3, validate_positive, validate_range_f32};

/// Number of point lights the shaders declare.
pub(crate) const POINT_LIGHT_COUNT: usize = 2;

pub(crate) fn validate_lighting(errors: &mut Vec<String>, config: &LumenConfig) {
    let lighting = &config.lighting;

    let dir = &lighting.directional;
    if dir.direction.iter().all(|c| *c == 0.0) {
        errors.push("lighting.directional.direction must not be the zero vector".into());
    }
    validate_finite3(errors, "lighting.directional.direction", dir.direction);
    validate_color(errors, "lighting.directional.color", dir.color);
    validate_range_f32(
        errors,
        "lighting.directional.ambient_strength",
        dir.ambient_strength,
        0.0,
        1.0,
    );
    validate_range_f32(
        errors,
        "lighting.directional.specular_strength",
        dir.specular_strength,
        0.0,
        10.0,
    );

    if lighting.point.len() != POINT_LIGHT_COUNT {
        errors.push(format!(
            "lighting.point has {} entries, expected exactly {POINT_LIGHT_COUNT}",
            lighting.point.len()
        ));
    }

    for (i, light) in lighting.point.iter().enumerate() {
        let prefix = format!("lighting.point[{i}]");
        validate_finite3(errors, &format!("{prefix}.position"), light.position);
        validate_color(errors, &format!("{prefix}.color"), light.color);
        validate_range_f32(
            errors,
            &format!("{prefix}.ambient_strength"),
            light.ambient_strength,
            0.0,
            1.0,
        );
        validate_range_f32(
            errors,
            &format!("{prefix}.specular_strength"),
            light.specular_strength,
            0.0,
            10.0,
        );
        validate_positive(
            errors,
            &format!("{prefix}.attenuation.constant"),
            light.attenuation.constant,
        );
        validate_range_f32(
            errors,
            &format!("{prefix}.attenuation.linear"),
            light.attenuation.linear,
            0.0,
            10.0,
        );
        validate_range_f32(
            errors,
            &format!("{prefix}.attenuation.exponent"),
            light.attenuation.exponent,
            0.0,
            10.0,
        );
    }
}

fn validate_color(errors: &mut Vec<String>, name: &str, color: [f32; 3]) {
    for (i, c) in color.iter().enumerate() {
        validate_range_f32(errors, &format!("{name}[{i}]"), *c, 0.0, 1.0);
    }
}
