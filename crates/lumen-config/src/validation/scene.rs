//! Scene and terrain validation.

use crate::schema::LumenConfig;

use super::helpers::{validate_finite3, validate_positive, validate_range, validate_range_f32};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &LumenConfig) {
    let scene = &config.scene;

    // Sphere generation divides by (fidelity - 1)
    validate_range(errors, "scene.fidelity", scene.fidelity, 2, 512);
    validate_range(errors, "scene.ball_count", scene.ball_count, 0, 256);
    validate_positive(errors, "scene.ball_radius", scene.ball_radius);
    validate_positive(errors, "scene.outline_radius", scene.outline_radius);
    validate_range_f32(
        errors,
        "scene.rotation_step_degrees",
        scene.rotation_step_degrees,
        -360.0,
        360.0,
    );
    for (i, c) in scene.outline_color.iter().enumerate() {
        validate_range_f32(errors, &format!("scene.outline_color[{i}]"), *c, 0.0, 1.0);
    }

    validate_positive(errors, "scene.mirror.radius", scene.mirror.radius);
    validate_finite3(errors, "scene.mirror.position", scene.mirror.position);
}

pub(crate) fn validate_terrain(errors: &mut Vec<String>, config: &LumenConfig) {
    let terrain = &config.terrain;
    validate_range(errors, "terrain.cells", terrain.cells, 1, 1024);
    validate_positive(errors, "terrain.size", terrain.size);
    validate_range_f32(errors, "terrain.height_scale", terrain.height_scale, 0.0, 100.0);
    validate_finite3(errors, "terrain.position", terrain.position);
}
