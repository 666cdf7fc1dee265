//! Run conditions and re-exports for systems that react to pointer interaction

use bevy::prelude::*;

pub use crate::events::{InteractionRequest, TargetClickEvent, TargetExitEvent, TargetHoverEvent};
pub use crate::interaction::{InteractionContext, InteractiveTarget};

/// True while some target holds the hover slot.
pub fn any_hovered(ctx: Res<InteractionContext>) -> bool {
    ctx.is_any_hovered()
}

