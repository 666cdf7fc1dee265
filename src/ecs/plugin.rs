//! Interaction ECS Plugin
//!
//! Registers the interaction resources, messages and systems, ordered by
//! [`InteractionSet`].

use bevy::input::ButtonInput;
use bevy::prelude::*;
use pointer_input::{CursorPosition, PointerBindings};

use super::animation;
use super::systems::{self, InteractionSet};
use crate::interaction::InteractionContext;
use crate::resources::{DebugOverlays, Materials, ModalFlags, PointerRaycast};
use crate::settings::Settings;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        systems::configure_interaction_sets(app);

        // Existing resources (from SettingsPlugin or the input plugin) win.
        app.init_resource::<InteractionContext>()
            .init_resource::<PointerRaycast>()
            .init_resource::<ModalFlags>()
            .init_resource::<Materials>()
            .init_resource::<DebugOverlays>()
            .init_resource::<CursorPosition>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PointerBindings>()
            .init_resource::<Settings>()
            .add_observer(systems::release_removed_target)
            .add_systems(
                Update,
                systems::apply_interaction_requests.in_set(InteractionSet::Requests),
            )
            .add_systems(
                Update,
                (systems::attach_new_targets, systems::apply_enable_requests)
                    .chain()
                    .in_set(InteractionSet::Lifecycle),
            )
            .add_systems(
                Update,
                systems::update_pointer_raycast.in_set(InteractionSet::Raycast),
            )
            .add_systems(
                Update,
                systems::tick_interactive_targets.in_set(InteractionSet::Tick),
            )
            .add_systems(
                Update,
                animation::settle_animator_triggers.in_set(InteractionSet::Animation),
            )
            .add_systems(
                Update,
                systems::refresh_debug_overlays.in_set(InteractionSet::Overlay),
            );
    }
}
