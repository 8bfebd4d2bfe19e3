use super::types::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into a `+`-separated display string.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| match m {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => {
                if cfg!(target_os = "macos") {
                    "Cmd"
                } else {
                    "Super"
                }
            }
        })
        .collect();
    parts.push(&kb.key);
    parts.join("+")
}
