use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

pub use target_types::{AnimationParamNames, TargetConfig};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PointerSettings {
    /// Button label understood by `pointer_input::mouse_button_from_label`.
    pub primary_button: String,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            primary_button: "Left".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    /// Master switch; per-target `show_debug_overlay` still applies.
    pub enabled: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub pointer: PointerSettings,
    pub overlay: OverlaySettings,
    /// Config given to scene objects marked interactive without their own.
    pub defaults: TargetConfig,
}
