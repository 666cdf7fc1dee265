//! ECS systems driving pointer interaction
//!
//! Systems run once per frame in the order fixed by [`InteractionSet`].

mod lifecycle;
mod overlay;
mod pointer;
mod requests;
mod targets;

pub use lifecycle::*;
pub use overlay::*;
pub use pointer::*;
pub use requests::*;
pub use targets::*;

use bevy::prelude::*;

/// Per-frame interaction phases, in execution order:
/// 1. **Requests** - apply inbound [`crate::events::InteractionRequest`]s
/// 2. **Lifecycle** - attach new targets, enable/disable
///
/// Removed or despawned targets are released by an observer, outside the sets.
/// 3. **Raycast** - sample the pointer and find the nearest hit, once
/// 4. **Tick** - run every registered target's state machine
/// 5. **Animation** - consume animator triggers
/// 6. **Overlay** - rebuild debug panels
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    Requests,
    Lifecycle,
    Raycast,
    Tick,
    Animation,
    Overlay,
}

pub fn configure_interaction_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            InteractionSet::Requests,
            InteractionSet::Lifecycle.after(InteractionSet::Requests),
            InteractionSet::Raycast.after(InteractionSet::Lifecycle),
            InteractionSet::Tick.after(InteractionSet::Raycast),
            InteractionSet::Animation.after(InteractionSet::Tick),
            InteractionSet::Overlay.after(InteractionSet::Animation),
        ),
    );
}

fn direct_children(children: Option<&Children>) -> Vec<Entity> {
    children.map(|children| children.to_vec()).unwrap_or_default()
}
