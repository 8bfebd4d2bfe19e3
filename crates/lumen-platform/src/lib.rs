pub mod held_keys;
pub mod input;
pub mod keymap;
pub mod winit_keys;

pub use held_keys::{HeldKeys, MoveIntent};
pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use winit_keys::normalize_winit_key;
