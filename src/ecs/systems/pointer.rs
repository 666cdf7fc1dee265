use bevy::input::ButtonInput;
use bevy::prelude::*;
use pointer_input::{CursorPosition, PointerBindings, PointerSnapshot};
use scene::nearest_hit;

use crate::ecs::components::Collider;
use crate::interaction::{FrameHit, FrameInput, InteractiveTarget};
use crate::resources::{ActiveCamera, PointerRaycast};

/// Samples the pointer and casts one ray for the whole frame.
pub fn update_pointer_raycast(
    cursor: Res<CursorPosition>,
    buttons: Res<ButtonInput<MouseButton>>,
    bindings: Res<PointerBindings>,
    time: Res<Time>,
    camera: Option<Res<ActiveCamera>>,
    colliders: Query<(Entity, &Collider, Option<&Name>, Has<InteractiveTarget>)>,
    mut raycast: ResMut<PointerRaycast>,
) {
    let pointer = PointerSnapshot::capture(&cursor, &buttons, &bindings, time.elapsed_secs());

    let Some(camera) = camera else {
        raycast.frame = FrameInput {
            pointer,
            has_camera: false,
            hit: None,
        };
        return;
    };

    let hit = camera
        .0
        .screen_point_to_ray(pointer.position)
        .and_then(|ray| {
            nearest_hit(
                &ray,
                f32::INFINITY,
                colliders.iter().map(|(entity, collider, _, _)| (entity, &collider.shape)),
            )
        })
        .and_then(|hit| {
            let (_, _, name, is_target) = colliders.get(hit.key).ok()?;
            Some(FrameHit {
                entity: hit.key,
                target: is_target.then_some(hit.key),
                name: name
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_else(|| format!("{:?}", hit.key)),
                distance: hit.distance,
                point: hit.point,
            })
        });

    raycast.frame = FrameInput {
        pointer,
        has_camera: true,
        hit,
    };
}
