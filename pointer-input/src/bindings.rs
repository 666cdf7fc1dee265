use bevy::input::mouse::MouseButton;
use bevy::prelude::Resource;

/// Which mouse button counts as the primary (click) button.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerBindings {
    pub primary: MouseButton,
}

impl Default for PointerBindings {
    fn default() -> Self {
        Self {
            primary: MouseButton::Left,
        }
    }
}

impl PointerBindings {
    /// Falls back to the left button when the label is not recognised.
    pub fn from_label(label: &str) -> Self {
        match mouse_button_from_label(label) {
            Some(primary) => Self { primary },
            None => {
                tracing::warn!(label, "unknown primary button, using Left");
                Self::default()
            }
        }
    }
}

pub fn mouse_button_from_label(label: &str) -> Option<MouseButton> {
    match label.trim() {
        "Left" | "Mouse0" => Some(MouseButton::Left),
        "Right" | "Mouse1" => Some(MouseButton::Right),
        "Middle" | "Mouse2" => Some(MouseButton::Middle),
        "Back" => Some(MouseButton::Back),
        "Forward" => Some(MouseButton::Forward),
        other => other
            .strip_prefix("Other")
            .and_then(|n| n.parse::<u16>().ok())
            .map(MouseButton::Other),
    }
}

pub fn mouse_button_label(button: MouseButton) -> String {
    match button {
        MouseButton::Left => "Left".to_string(),
        MouseButton::Right => "Right".to_string(),
        MouseButton::Middle => "Middle".to_string(),
        MouseButton::Back => "Back".to_string(),
        MouseButton::Forward => "Forward".to_string(),
        MouseButton::Other(n) => format!("Other{n}"),
    }
}
