//! Full configuration validation.
//!
//! Validates numeric ranges, light cardinality and colour formats. Each
//! domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod lighting;
mod misc;
mod scene;


use crate::schema::LumenConfig;
use lumen_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LumenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    misc::validate_render(&mut errors, config);
    misc::validate_camera(&mut errors, config);
    misc::validate_keybinds(&mut errors, config);
    misc::validate_logging(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    scene::validate_terrain(&mut errors, config);
    lighting::validate_lighting(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
