use bevy::prelude::*;

pub mod ecs;
pub mod events;
pub mod interaction;
pub mod plugins;
pub mod resources;
pub mod scene_file;
pub mod settings;
pub mod settings_types;

pub use interaction::{InteractionContext, InteractiveTarget};
pub use resources::{ActiveCamera, DebugOverlays, Materials, ModalFlags, PointerRaycast};

pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("Clickables");
    let _ = std::fs::create_dir_all(&path);
    path
}

pub struct CoreEventsPlugin;

impl Plugin for CoreEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<events::InteractionRequest>()
            .add_message::<events::TargetHoverEvent>()
            .add_message::<events::TargetExitEvent>()
            .add_message::<events::TargetClickEvent>();
    }
}

/// Messages, settings from the user's data directory and the interaction
/// systems.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CoreEventsPlugin,
            settings::SettingsPlugin::default(),
            ecs::InteractionPlugin,
        ));
    }
}
