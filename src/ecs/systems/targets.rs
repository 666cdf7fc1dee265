use bevy::prelude::*;

use crate::ecs::animation::AnimatorParams;
use crate::ecs::components::Renderable;
use crate::events::{TargetClickEvent, TargetExitEvent, TargetHoverEvent};
use crate::interaction::{AnimationSink, Host, InteractionContext, InteractiveTarget};
use crate::resources::PointerRaycast;

/// Runs the hover/click state machine of every registered target against
/// this frame's ray cast and forwards what happened as messages.
pub fn tick_interactive_targets(
    mut ctx: ResMut<InteractionContext>,
    raycast: Res<PointerRaycast>,
    mut targets: Query<(
        Entity,
        &mut InteractiveTarget,
        Option<&Children>,
        Option<&mut AnimatorParams>,
    )>,
    mut surfaces: Query<&mut Renderable>,
    mut hovers: MessageWriter<TargetHoverEvent>,
    mut exits: MessageWriter<TargetExitEvent>,
    mut clicks: MessageWriter<TargetClickEvent>,
) {
    for (entity, mut target, children, mut animator) in targets.iter_mut() {
        if !ctx.is_registered(entity) {
            continue;
        }

        let children = super::direct_children(children);
        let mut host = Host::new(&mut surfaces, &children).with_animator(
            animator
                .as_deref_mut()
                .map(|params| params as &mut dyn AnimationSink),
        );
        let report = target.tick(entity, &mut ctx, &raycast.frame, &mut host);

        if report.entered {
            hovers.write(TargetHoverEvent { entity });
        }
        if report.exited {
            exits.write(TargetExitEvent { entity });
        }
        if report.clicked {
            clicks.write(TargetClickEvent {
                entity,
                point: Some(target.last_click_position()),
                scripted: false,
            });
        }
    }
}
