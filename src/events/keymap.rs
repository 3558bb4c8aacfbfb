#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Clear,
    ToggleIdentityMode,
    ToggleStrokeHue,
    ToggleStatus,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "c" | "C" | "Escape" | "Backspace" => Some(KeyAction::Clear),
        "i" | "I" => Some(KeyAction::ToggleIdentityMode),
        "t" | "T" => Some(KeyAction::ToggleStrokeHue),
        "h" | "H" => Some(KeyAction::ToggleStatus),
        _ => None,
    }
}
