use bevy::prelude::*;
use tracing::debug;

use crate::interaction::{InteractionContext, InteractiveTarget, OverlayInputs, OverlayPanel};
use crate::resources::{ActiveCamera, DebugOverlays, ModalFlags};
use crate::settings::Settings;

/// Rebuilds the debug panel of every target that shows one.
pub fn refresh_debug_overlays(
    settings: Res<Settings>,
    ctx: Res<InteractionContext>,
    camera: Option<Res<ActiveCamera>>,
    flags: Res<ModalFlags>,
    time: Res<Time>,
    targets: Query<(Entity, &InteractiveTarget, Option<&Name>)>,
    names: Query<&Name>,
    mut overlays: ResMut<DebugOverlays>,
) {
    if !settings.overlay.enabled {
        if !overlays.panels.is_empty() {
            overlays.panels.clear();
        }
        return;
    }

    overlays.panels.retain(|entity, _| {
        targets
            .get(*entity)
            .is_ok_and(|(_, target, _)| target.config().show_debug_overlay)
    });

    let hover_owner_name = ctx.hover_owner().map(|owner| display_name(owner, names.get(owner).ok()));
    let camera_name = camera.as_ref().map(|camera| camera.0.name.as_str());

    for (entity, target, name) in targets.iter() {
        if !target.config().show_debug_overlay {
            continue;
        }

        let object_name = display_name(entity, name);
        let inputs = OverlayInputs {
            object_name: &object_name,
            camera_name,
            object_active: ctx.is_registered(entity),
            dialogue_open: flags.dialogue_open,
            results_open: flags.results_open,
            hover_owner_name: hover_owner_name.as_deref(),
            now: time.elapsed_secs(),
        };
        let panel = OverlayPanel::build(target, &inputs);

        if overlays.panels.get(&entity) != Some(&panel) {
            debug!(?entity, "{panel}");
            overlays.panels.insert(entity, panel);
        }
    }
}

fn display_name(entity: Entity, name: Option<&Name>) -> String {
    name.map(|name| name.as_str().to_string())
        .unwrap_or_else(|| format!("{entity:?}"))
}
