use bevy::prelude::*;
use tracing::{info, warn};

use crate::ecs::components::{Collider, Renderable};
use crate::events::InteractionRequest;
use crate::interaction::{InteractionContext, InteractiveTarget};
use crate::resources::{ActiveCamera, Materials};

/// Attaches targets the frame they are inserted.
pub fn attach_new_targets(
    mut ctx: ResMut<InteractionContext>,
    camera: Option<Res<ActiveCamera>>,
    materials: Res<Materials>,
    mut added: Query<(Entity, &mut InteractiveTarget, Has<Collider>), Added<InteractiveTarget>>,
    surfaces: Query<&mut Renderable>,
) {
    for (entity, mut target, has_collider) in added.iter_mut() {
        target.attach(
            entity,
            &mut ctx,
            camera.is_some(),
            has_collider,
            &materials.0,
            &surfaces,
        );
    }
}

/// Detaches or re-attaches targets on request. The component stays in place
/// either way.
pub fn apply_enable_requests(
    mut requests: MessageReader<InteractionRequest>,
    mut ctx: ResMut<InteractionContext>,
    camera: Option<Res<ActiveCamera>>,
    materials: Res<Materials>,
    mut targets: Query<(&mut InteractiveTarget, Has<Collider>, Option<&Children>)>,
    mut surfaces: Query<&mut Renderable>,
) {
    for request in requests.read() {
        let InteractionRequest::SetEnabled { entity, enabled } = *request else {
            continue;
        };
        let Ok((mut target, has_collider, children)) = targets.get_mut(entity) else {
            warn!(?entity, enabled, "enable request for an entity without an interactive target");
            continue;
        };

        if enabled {
            target.attach(
                entity,
                &mut ctx,
                camera.is_some(),
                has_collider,
                &materials.0,
                &surfaces,
            );
        } else {
            let children = super::direct_children(children);
            target.detach(entity, &mut ctx, &children, &mut surfaces);
        }
    }
}

/// Restores materials and drops every trace of a target whose component is
/// removed, including by despawn. Runs while the component is still present.
pub fn release_removed_target(
    remove: On<Remove, InteractiveTarget>,
    mut ctx: ResMut<InteractionContext>,
    mut targets: Query<(&mut InteractiveTarget, Option<&Children>)>,
    mut surfaces: Query<&mut Renderable>,
) {
    let entity = remove.entity;
    let Ok((mut target, children)) = targets.get_mut(entity) else {
        return;
    };

    let children = super::direct_children(children);
    target.detach(entity, &mut ctx, &children, &mut surfaces);
    if ctx.hover_owner() == Some(entity) {
        info!(?entity, "removed target released the hover slot");
    }
    ctx.forget(entity);
}
