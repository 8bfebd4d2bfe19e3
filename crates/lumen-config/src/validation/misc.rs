//! Window, render, camera and keybind validation.

use lumen_common::Color;

use crate::schema::LumenConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f32};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LumenConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &LumenConfig) {
    if Color::from_hex(&config.render.clear_color).is_none() {
        errors.push(format!(
            "render.clear_color = {:?} is not a #rrggbb or #rrggbbaa colour",
            config.render.clear_color
        ));
    }
    validate_range_f32(errors, "render.shininess", config.render.shininess, 1.0, 1024.0);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &LumenConfig) {
    let camera = &config.camera;
    validate_range_f32(errors, "camera.fov_degrees", camera.fov_degrees, 1.0, 179.0);
    validate_positive(errors, "camera.near", camera.near);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_range_f32(errors, "camera.pitch_degrees", camera.pitch_degrees, -89.0, 89.0);
    validate_range_f32(errors, "camera.move_speed", camera.move_speed, 0.0, 1000.0);
    validate_range_f32(
        errors,
        "camera.turn_speed_degrees",
        camera.turn_speed_degrees,
        0.0,
        3600.0,
    );
}

pub(crate) fn validate_keybinds(errors: &mut Vec<String>, config: &LumenConfig) {
    let kb = &config.keybinds;
    let bindings = [
        ("keybinds.toggle_scissor", &kb.toggle_scissor),
        ("keybinds.toggle_stencil", &kb.toggle_stencil),
        ("keybinds.toggle_wireframe", &kb.toggle_wireframe),
        ("keybinds.toggle_face_culling", &kb.toggle_face_culling),
        ("keybinds.reset_toggles", &kb.reset_toggles),
        ("keybinds.quit", &kb.quit),
    ];

    for (i, (name, value)) in bindings.iter().enumerate() {
        if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
            continue;
        }
        for (other_name, other) in &bindings[i + 1..] {
            if value.eq_ignore_ascii_case(other) {
                errors.push(format!("{name} and {other_name} are both bound to {value:?}"));
            }
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &LumenConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
