//! Winit key name normalization.
//!
//! Converts winit's logical key names to the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind).

pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                // Escape, Enter, F1.. pass through
                key.to_string()
            }
        }
    }
}
