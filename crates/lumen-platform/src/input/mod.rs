//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;

#[cfg(test)]
mod tests {
    use super::key_combo::*;
    use super::*;
    use crate::keymap::parse_keybind;
    use lumen_common::actions::Action;
    use lumen_config::schema::KeybindConfig;

    fn plain(key: &str) -> KeyCombo {
        KeyCombo::from_winit(false, false, false, false, key.into())
    }

    #[test]
    fn keycombo_from_keybind() {
        let combo = KeyCombo::from_keybind(&parse_keybind("Ctrl+Z").unwrap());
        assert_eq!(combo.mods, MOD_CTRL);
        assert_eq!(combo.key, "Z");
    }

    #[test]
    fn keycombo_from_winit_matches_parsed() {
        let a = KeyCombo::from_winit(false, true, true, false, "C".into());
        let b = KeyCombo::from_keybind(&parse_keybind("Shift+Alt+C").unwrap());
        assert_eq!(a, b);
        assert_eq!(a.mods, MOD_ALT | MOD_SHIFT);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn registry_default_lookups() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&plain("Z")), Some(Action::ToggleScissor));
        assert_eq!(registry.lookup(&plain("X")), Some(Action::ToggleStencil));
        assert_eq!(registry.lookup(&plain("C")), Some(Action::ToggleWireframe));
        assert_eq!(registry.lookup(&plain("V")), Some(Action::ToggleFaceCulling));
        assert_eq!(registry.lookup(&plain("R")), Some(Action::ResetToggles));
        assert_eq!(registry.lookup(&plain("Escape")), Some(Action::Quit));
    }

    #[test]
    fn registry_lookup_respects_modifiers() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let combo = KeyCombo::from_winit(true, false, false, false, "Z".into());
        assert_eq!(registry.lookup(&combo), None);
        assert_eq!(registry.lookup(&plain("W")), None);
    }

    #[test]
    fn invalid_binding_is_skipped() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            ..KeybindConfig::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 5);
        assert!(registry.keybind_for_action(Action::Quit).is_none());
    }

    #[test]
    fn help_lines_follow_action_order() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let lines = registry.help_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Z: "));
        assert!(lines[5].starts_with("Escape: "));
    }

    #[test]
    fn keycombo_to_keybind_roundtrip() {
        let original = parse_keybind("Ctrl+Shift+R").unwrap();
        let combo = KeyCombo::from_keybind(&original);
        assert_eq!(KeyCombo::from_keybind(&combo.to_keybind()), combo);
    }
}
