use bevy::prelude::*;
use tracing::{debug, info, warn};

use crate::ecs::animation::AnimatorParams;
use crate::ecs::components::Renderable;
use crate::events::{InteractionRequest, TargetClickEvent};
use crate::interaction::{AnimationSink, Host, InteractionContext, InteractiveTarget};

/// Applies inbound requests. Enable/disable is handled by
/// [`super::apply_enable_requests`] in the lifecycle phase.
pub fn apply_interaction_requests(
    mut requests: MessageReader<InteractionRequest>,
    ctx: Res<InteractionContext>,
    time: Res<Time>,
    mut targets: Query<(
        &mut InteractiveTarget,
        Option<&Children>,
        Option<&mut AnimatorParams>,
    )>,
    mut surfaces: Query<&mut Renderable>,
    mut clicks: MessageWriter<TargetClickEvent>,
) {
    for request in requests.read() {
        let entity = match *request {
            InteractionRequest::SetAllClickable { active } => {
                for member in ctx.members() {
                    if let Ok((mut target, _, _)) = targets.get_mut(member) {
                        target.set_clickable(active);
                    }
                }
                info!(active, members = ctx.len(), "set all targets clickable");
                continue;
            }
            InteractionRequest::SetEnabled { .. } => continue,
            InteractionRequest::SetClickable { entity, .. }
            | InteractionRequest::SetHighlighted { entity, .. }
            | InteractionRequest::TriggerClick { entity }
            | InteractionRequest::SetBlocked { entity, .. } => entity,
        };

        let Ok((mut target, children, mut animator)) = targets.get_mut(entity) else {
            warn!(?entity, ?request, "request for an entity without an interactive target");
            continue;
        };

        match *request {
            InteractionRequest::SetClickable { clickable, .. } => target.set_clickable(clickable),
            InteractionRequest::SetBlocked { blocked, .. } => target.set_globally_blocked(blocked),
            InteractionRequest::SetHighlighted { on, .. } => {
                let children = super::direct_children(children);
                let mut host = Host::new(&mut surfaces, &children);
                if !target.set_highlighted(on, entity, &mut host) {
                    debug!(?entity, on, "nothing to highlight");
                }
            }
            InteractionRequest::TriggerClick { .. } => {
                let children = super::direct_children(children);
                let mut host = Host::new(&mut surfaces, &children).with_animator(
                    animator
                        .as_deref_mut()
                        .map(|params| params as &mut dyn AnimationSink),
                );
                target.trigger_click(entity, time.elapsed_secs(), &mut host);
                clicks.write(TargetClickEvent {
                    entity,
                    point: None,
                    scripted: true,
                });
            }
            InteractionRequest::SetAllClickable { .. } | InteractionRequest::SetEnabled { .. } => {}
        }
    }
}
