//! Continuous camera input.
//!
//! Toggles fire once per key press through the
//! [`KeybindRegistry`](crate::KeybindRegistry). Movement keys act for as
//! long as they are held, so they are tracked here and sampled per frame.

use std::collections::HashSet;

/// Per-frame movement request derived from held keys.
///
/// Each axis is in `[-1, 1]`; opposing keys cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// +1 forward (W), -1 backward (S).
    pub forward: f32,
    /// +1 right (D), -1 left (A).
    pub right: f32,
    /// +1 up (E), -1 down (Q).
    pub up: f32,
    /// +1 turn right, -1 turn left (arrow keys).
    pub yaw: f32,
    /// +1 look up, -1 look down (arrow keys).
    pub pitch: f32,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Set of currently pressed normalized key names.
#[derive(Debug, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Forget everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn intent(&self) -> MoveIntent {
        let axis = |pos: &str, neg: &str| -> f32 {
            let mut v = 0.0;
            if self.is_held(pos) {
                v += 1.0;
            }
            if self.is_held(neg) {
                v -= 1.0;
            }
            v
        };
        MoveIntent {
            forward: axis("W", "S"),
            right: axis("D", "A"),
            up: axis("E", "Q"),
            yaw: axis("Right", "Left"),
            pitch: axis("Up", "Down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_is_idle() {
        assert!(HeldKeys::new().intent().is_idle());
    }

    #[test]
    fn held_keys_map_to_axes() {
        let mut held = HeldKeys::new();
        held.press("W");
        held.press("A");
        held.press("E");
        held.press("Left");
        let intent = held.intent();
        assert_eq!(intent.forward, 1.0);
        assert_eq!(intent.right, -1.0);
        assert_eq!(intent.up, 1.0);
        assert_eq!(intent.yaw, -1.0);
        assert_eq!(intent.pitch, 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut held = HeldKeys::new();
        held.press("W");
        held.press("S");
        assert_eq!(held.intent().forward, 0.0);
    }

    #[test]
    fn release_and_clear() {
        let mut held = HeldKeys::new();
        held.press("D");
        held.press("Up");
        held.release("D");
        assert_eq!(held.intent().right, 0.0);
        assert_eq!(held.intent().pitch, 1.0);
        held.clear();
        assert!(held.intent().is_idle());
    }
}
