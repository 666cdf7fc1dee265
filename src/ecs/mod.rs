//! Entity Component System module
//!
//! Components, systems and the plugin that run pointer interaction inside a
//! Bevy app. Systems execute in the order fixed by [`systems::InteractionSet`].

pub mod animation;
pub mod components;
pub mod interaction;
pub mod plugin;
pub mod systems;

// Re-export commonly used items
pub use plugin::InteractionPlugin;
pub use systems::InteractionSet;
